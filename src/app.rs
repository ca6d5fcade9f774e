//! Cozy Cabin window: the animated canvas over a bottom row of playback buttons.

use std::time::Instant;

use eframe::egui;

use crate::audio::LoopingClip;
use crate::config::CabinConfig;
use crate::panel::AnimatedPanel;
use crate::playback::PlaybackController;
use crate::render::{paint_scene, EguiCanvas};
use crate::scene::CabinScene;

/// Main application state
pub struct CabinApp {
    panel: AnimatedPanel,
    playback: PlaybackController,
    background: Option<egui::TextureHandle>,
}

impl CabinApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &CabinConfig,
        background: Option<egui::ColorImage>,
        clip: Option<Box<dyn LoopingClip>>,
    ) -> Self {
        let background = background.map(|image| {
            cc.egui_ctx
                .load_texture("cabin-background", image, egui::TextureOptions::LINEAR)
        });

        let now = Instant::now();
        let scene = CabinScene::new(config);

        Self {
            panel: AnimatedPanel::new(scene, config.tick_interval, now),
            playback: PlaybackController::new(clip),
            background,
        }
    }

    fn render_controls(&mut self, ctx: &egui::Context, now: Instant) {
        egui::TopBottomPanel::bottom("playback_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Play Cabin Sound").clicked() {
                    self.playback.play(&mut self.panel, now);
                }
                if ui.button("Stop Cabin Sound").clicked() {
                    self.playback.stop(&mut self.panel);
                }
            });
            ui.add_space(4.0);
        });
    }

    fn render_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                let mut canvas = EguiCanvas::new(&painter, rect, self.background.as_ref());
                paint_scene(&self.panel.scene, &mut canvas);
            });
    }
}

impl eframe::App for CabinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.panel.poll(now);

        self.render_controls(ctx, now);
        self.render_canvas(ctx);

        // Wake up for the next tick; a stopped panel only repaints on input.
        if let Some(delay) = self.panel.repaint_delay(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
