//! Render pass for Cozy Cabin
//! Paints the background and every pool back-to-front onto a `Canvas`.

use std::f32::consts::TAU;
use std::path::Path;

use anyhow::Context;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, TextureHandle, Vec2};

use crate::scene::CabinScene;

const OVAL_SEGMENTS: usize = 32;

/// Drawing surface with a global composite alpha, like a 2D graphics context.
pub trait Canvas {
    /// Background stretched to the full canvas.
    fn draw_background(&mut self);

    /// Blend factor applied to every following fill, clamped to `[0, 1]`.
    fn set_alpha(&mut self, alpha: f32);

    /// Fill the ellipse inscribed in `bounds` (canvas-local coordinates).
    fn fill_oval(&mut self, bounds: Rect, color: Color32);
}

fn oval(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::from_min_size(Pos2::new(x, y), Vec2::new(width, height))
}

/// Centered on `(x, y)`, `diameter` wide and `diameter * squash` tall.
fn centered_oval(x: f32, y: f32, diameter: f32, squash: f32) -> Rect {
    let height = diameter * squash;
    oval(x - diameter / 2.0, y - height / 2.0, diameter, height)
}

/// Paint one frame in the fixed layer order:
/// background, shadows, floor reflections, window reflections, ambient
/// lights, fire glow, embers, snow, steam.
pub fn paint_scene(scene: &CabinScene, canvas: &mut impl Canvas) {
    canvas.draw_background();

    let shadow_color = scene.shadows.spec().color;
    for s in scene.shadows.iter() {
        canvas.set_alpha(s.alpha);
        canvas.fill_oval(oval(s.x, s.y, s.width, s.height), shadow_color);
    }

    for pool in [
        &scene.floor_reflections,
        &scene.window_reflections,
        &scene.ambient_lights,
        &scene.fire_glows,
    ] {
        let squash = pool.spec().squash;
        for g in pool.iter() {
            canvas.set_alpha(g.alpha);
            canvas.fill_oval(centered_oval(g.x, g.y, g.radius, squash), g.color);
        }
    }

    canvas.set_alpha(1.0);
    for e in scene.embers.iter() {
        canvas.fill_oval(oval(e.x, e.y, e.size, e.size), e.color);
    }

    for s in scene.snowflakes.iter() {
        let size = s.size as f32;
        canvas.fill_oval(oval(s.x, s.y, size, size), Color32::WHITE);
    }

    let steam = scene.steam.spec();
    let [w, h] = steam.puff_size;
    for p in scene.steam.iter() {
        canvas.set_alpha(p.alpha);
        canvas.fill_oval(oval(p.x, p.y, w, h), steam.color);
    }
    canvas.set_alpha(1.0);
}

// ============================================================================
// egui backend
// ============================================================================

/// Canvas over an egui painter clipped to the panel rect.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Option<&'a TextureHandle>,
    alpha: f32,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Option<&'a TextureHandle>) -> Self {
        Self {
            painter,
            rect,
            background,
            alpha: 1.0,
        }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn draw_background(&mut self) {
        // Missing image: nothing to stretch, the panel stays blank underneath.
        if let Some(texture) = self.background {
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            self.painter.image(texture.id(), self.rect, uv, Color32::WHITE);
        }
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_oval(&mut self, bounds: Rect, color: Color32) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 || self.alpha <= 0.0 {
            return;
        }
        let bounds = bounds.translate(self.rect.min.to_vec2());
        let color = if self.alpha < 1.0 {
            color.gamma_multiply(self.alpha)
        } else {
            color
        };
        self.painter.add(Shape::convex_polygon(
            oval_points(bounds),
            color,
            Stroke::NONE,
        ));
    }
}

/// Polygon approximating the ellipse inscribed in `bounds`.
fn oval_points(bounds: Rect) -> Vec<Pos2> {
    let center = bounds.center();
    let radii = bounds.size() / 2.0;
    (0..OVAL_SEGMENTS)
        .map(|i| {
            let a = i as f32 * TAU / OVAL_SEGMENTS as f32;
            Pos2::new(center.x + a.cos() * radii.x, center.y + a.sin() * radii.y)
        })
        .collect()
}

/// Decode the background image into an egui-ready RGBA image.
pub fn load_background(path: impl AsRef<Path>) -> anyhow::Result<egui::ColorImage> {
    let path = path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("failed to load background {}", path.display()))?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    log::info!("Loaded background {} ({}x{})", path.display(), size[0], size[1]);
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}
