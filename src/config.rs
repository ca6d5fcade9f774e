//! Configuration for Cozy Cabin
//! Every constant the scene uses: window, assets, timer cadence, regions,
//! pool sizes and the per-kind spawn/decay ranges.

use std::ops::Range;
use std::time::Duration;

use egui::{Color32, Pos2};
use rand::Rng;

// ============================================================================
// Regions
// ============================================================================

/// Fixed rectangle of the canvas bounding spawn and wrap coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Uniform x in `[left, right)`
    pub fn sample_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.left()..self.right())
    }

    /// Uniform y in `[top, bottom)`
    pub fn sample_y<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.top()..self.bottom())
    }
}

pub const FIRE_REGION: Region = Region::new(5.0, 145.0, 250.0, 260.0);
pub const WINDOW_REGION: Region = Region::new(600.0, 100.0, 500.0, 200.0);
pub const STEAM_REGION: Region = Region::new(1025.0, 265.0, 120.0, 150.0);
pub const FLOOR_REFLECTION_REGION: Region = Region::new(
    FIRE_REGION.x,
    FIRE_REGION.y + FIRE_REGION.height - 30.0,
    FIRE_REGION.width,
    60.0,
);

// ============================================================================
// Colors
// ============================================================================

/// Per-channel ranges a particle color is drawn from. A fixed channel is a
/// one-wide range such as `255..256`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tint {
    pub r: Range<u16>,
    pub g: Range<u16>,
    pub b: Range<u16>,
    pub a: Range<u16>,
}

impl Tint {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color32 {
        let [r, g, b, a] = self.sample_rgba(rng);
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    pub fn sample_rgba<R: Rng + ?Sized>(&self, rng: &mut R) -> [u8; 4] {
        let mut channel = |range: &Range<u16>| rng.gen_range(range.clone()).min(255) as u8;
        [
            channel(&self.r),
            channel(&self.g),
            channel(&self.b),
            channel(&self.a),
        ]
    }
}

// ============================================================================
// Particle kinds
// ============================================================================

/// Rising fire core.
#[derive(Clone, Debug)]
pub struct FireSpec {
    pub region: Region,
    pub size: Range<f32>,
    pub rise_speed: Range<f32>,
    /// Horizontal jitter per tick, drawn from `[-jitter, jitter)`
    pub jitter: f32,
    /// Size multiplier per tick
    pub shrink: f32,
    pub min_size: f32,
    pub tint: Tint,
}

impl Default for FireSpec {
    fn default() -> Self {
        Self {
            region: FIRE_REGION,
            size: 10.0..30.0,
            rise_speed: 0.5..2.0,
            jitter: 1.0,
            shrink: 0.98,
            min_size: 2.0,
            tint: Tint { r: 255..256, g: 100..255, b: 0..1, a: 150..250 },
        }
    }
}

/// Growing, fading light blob. Shared by the fire glow, both reflections and
/// the ambient light; only the numbers differ.
#[derive(Clone, Debug)]
pub struct LightSpec {
    /// Where the blob center is spawned
    pub area: Region,
    pub radius: Range<f32>,
    pub alpha: Range<f32>,
    pub growth: Range<f32>,
    /// Radius gain per tick is `growth * growth_scale`
    pub growth_scale: f32,
    /// Alpha lost per tick
    pub fade: f32,
    pub tint: Tint,
    /// Height of the drawn ellipse relative to its width
    pub squash: f32,
}

impl LightSpec {
    pub fn fire_glow() -> Self {
        let center = FIRE_REGION.center();
        Self {
            area: Region::new(center.x - 25.0, center.y - 25.0, 50.0, 50.0),
            radius: 50.0..80.0,
            alpha: 0.2..0.5,
            growth: 0.5..1.5,
            growth_scale: 1.0,
            fade: 0.005,
            tint: Tint { r: 255..256, g: 150..250, b: 0..1, a: 255..256 },
            squash: 1.0,
        }
    }

    pub fn floor_reflection() -> Self {
        Self {
            area: FLOOR_REFLECTION_REGION,
            radius: 30.0..50.0,
            alpha: 0.1..0.3,
            growth: 0.3..0.8,
            growth_scale: 0.2,
            fade: 0.002,
            tint: Tint { r: 255..256, g: 100..200, b: 0..1, a: 100..101 },
            squash: 0.5,
        }
    }

    pub fn window_reflection() -> Self {
        Self {
            area: WINDOW_REGION,
            radius: 20.0..35.0,
            alpha: 0.05..0.2,
            growth: 0.2..0.5,
            growth_scale: 0.1,
            fade: 0.001,
            tint: Tint { r: 255..256, g: 150..250, b: 0..1, a: 80..81 },
            squash: 1.0,
        }
    }

    /// Warm wash spilling out of the hearth, up to twice the fire's width.
    pub fn ambient_light() -> Self {
        Self {
            area: Region::new(
                FIRE_REGION.x,
                FIRE_REGION.y + FIRE_REGION.height / 2.0,
                FIRE_REGION.width * 2.0,
                50.0,
            ),
            radius: 50.0..90.0,
            alpha: 0.05..0.2,
            growth: 0.3..0.6,
            growth_scale: 1.0,
            fade: 0.002,
            tint: Tint { r: 255..256, g: 200..255, b: 150..205, a: 80..81 },
            squash: 1.0,
        }
    }
}

/// Snow falling past the window.
#[derive(Clone, Debug)]
pub struct SnowSpec {
    pub region: Region,
    pub fall_speed: Range<f32>,
    pub drift: Range<f32>,
    pub size: Range<u32>,
    /// Angular rate of the sway, radians per second of wall-clock time
    pub sway_rate: f32,
    /// Chance per tick of a sideways gust
    pub gust_chance: f64,
    /// Gust offset in whole pixels, drawn from `[-gust, gust]`
    pub gust: i32,
}

impl Default for SnowSpec {
    fn default() -> Self {
        Self {
            region: WINDOW_REGION,
            fall_speed: 0.5..2.0,
            drift: -0.5..0.5,
            size: 2..7,
            sway_rate: 1.0,
            gust_chance: 0.05,
            gust: 7,
        }
    }
}

/// Steam curling off the mug.
#[derive(Clone, Debug)]
pub struct SteamSpec {
    pub region: Region,
    /// Horizontal spawn spread around the region center, `[-spread, spread)`
    pub spread: f32,
    pub alpha: Range<f32>,
    /// Alpha after a reset; brighter than the first puffs
    pub reset_alpha: Range<f32>,
    pub rise_speed: Range<f32>,
    pub drift: Range<f32>,
    pub curve_offset: Range<f32>,
    /// Sway frequency per pixel of height
    pub curl: f32,
    pub fade: f32,
    pub puff_size: [f32; 2],
    pub color: Color32,
}

impl Default for SteamSpec {
    fn default() -> Self {
        Self {
            region: STEAM_REGION,
            spread: 10.0,
            alpha: 0.1..1.0,
            reset_alpha: 0.5..1.0,
            rise_speed: 0.5..1.5,
            drift: -0.2..0.2,
            curve_offset: 0.0..0.5,
            curl: 0.05,
            fade: 0.01,
            puff_size: [20.0, 30.0],
            color: Color32::from_rgb(230, 230, 230),
        }
    }
}

/// Soft shadow pooled on the hearth floor.
#[derive(Clone, Debug)]
pub struct ShadowSpec {
    pub area: Region,
    pub width: Range<f32>,
    pub height: Range<f32>,
    pub alpha: Range<f32>,
    pub fade: f32,
    pub color: Color32,
}

impl Default for ShadowSpec {
    fn default() -> Self {
        Self {
            area: Region::new(
                FIRE_REGION.x,
                FIRE_REGION.y + FIRE_REGION.height - 10.0,
                FIRE_REGION.width,
                10.0,
            ),
            width: 30.0..70.0,
            height: 5.0..10.0,
            alpha: 0.1..0.3,
            fade: 0.001,
            color: Color32::from_rgba_unmultiplied(0, 0, 0, 100),
        }
    }
}

// ============================================================================
// Pool sizes
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolCounts {
    pub embers: usize,
    pub fire_glows: usize,
    pub snowflakes: usize,
    pub steam: usize,
    pub floor_reflections: usize,
    pub window_reflections: usize,
    pub ambient_lights: usize,
    pub shadows: usize,
}

impl Default for PoolCounts {
    fn default() -> Self {
        Self {
            embers: 80,
            fire_glows: 15,
            snowflakes: 150,
            steam: 20,
            floor_reflections: 8,
            window_reflections: 6,
            ambient_lights: 4,
            shadows: 5,
        }
    }
}

// ============================================================================
// Main App Configuration
// ============================================================================

#[derive(Clone, Debug)]
pub struct CabinConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub background_path: String,
    pub audio_path: String,
    /// Animation timer period (~33 Hz)
    pub tick_interval: Duration,
    pub counts: PoolCounts,
    pub fire: FireSpec,
    pub fire_glow: LightSpec,
    pub snow: SnowSpec,
    pub steam: SteamSpec,
    pub floor_reflection: LightSpec,
    pub window_reflection: LightSpec,
    pub ambient_light: LightSpec,
    pub shadow: ShadowSpec,
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            title: "Cozy Cabin 2.0".to_string(),
            window_size: [1375.0, 725.0],
            background_path: "CabinSnowWindow.png".to_string(),
            audio_path: "FireplaceLoop.wav".to_string(),
            tick_interval: Duration::from_millis(30),
            counts: PoolCounts::default(),
            fire: FireSpec::default(),
            fire_glow: LightSpec::fire_glow(),
            snow: SnowSpec::default(),
            steam: SteamSpec::default(),
            floor_reflection: LightSpec::floor_reflection(),
            window_reflection: LightSpec::window_reflection(),
            ambient_light: LightSpec::ambient_light(),
            shadow: ShadowSpec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn floor_reflection_straddles_fire_bottom() {
        assert_eq!(FLOOR_REFLECTION_REGION.x, 5.0);
        assert_eq!(FLOOR_REFLECTION_REGION.y, 375.0);
        assert_eq!(FLOOR_REFLECTION_REGION.bottom(), FIRE_REGION.bottom() + 30.0);
    }

    #[test]
    fn region_samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = WINDOW_REGION.sample_x(&mut rng);
            let y = WINDOW_REGION.sample_y(&mut rng);
            assert!((600.0..1100.0).contains(&x));
            assert!((100.0..300.0).contains(&y));
        }
    }

    #[test]
    fn tint_keeps_fixed_channels() {
        let mut rng = StdRng::seed_from_u64(3);
        let tint = FireSpec::default().tint;
        for _ in 0..200 {
            let [r, g, b, a] = tint.sample_rgba(&mut rng);
            assert_eq!(r, 255);
            assert_eq!(b, 0);
            assert!(g >= 100);
            assert!((150..250).contains(&a));
        }
    }

    #[test]
    fn default_cadence_is_about_33_hz() {
        let config = CabinConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(30));
        assert_eq!(config.counts.snowflakes, 150);
    }
}
