//! Cozy Cabin - Main Application
//! A snowy cabin scene with a crackling fire, drifting snow and steaming cocoa,
//! animated over a background image and synced with a looping fireplace clip.

mod app;
mod audio;
mod config;
mod panel;
mod particles;
mod playback;
mod render;
mod scene;
mod timer;

use eframe::egui;

use app::CabinApp;
use audio::{AudioPlayer, LoopingClip};
use config::CabinConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stdout)
        .init();

    let config = CabinConfig::default();

    // Both loads block once, before the window opens. Neither failure is fatal.
    let clip: Option<Box<dyn LoopingClip>> = match AudioPlayer::load(&config.audio_path) {
        Ok(player) => Some(Box::new(player)),
        Err(e) => {
            log::error!("Error loading audio: {:#}", e);
            None
        }
    };

    let background = match render::load_background(&config.background_path) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("{:#}, drawing without background", e);
            None
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title.clone()),
        centered: true,
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(CabinApp::new(cc, &config, background, clip))),
    )
}
