//! The animated cabin: all particle pools plus the randomness that drives them.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::CabinConfig;
use crate::particles::{Ember, Glow, ParticlePool, Shadow, Snowflake, SteamPuff, Tick};

/// Every pool the panel draws, built once and mutated in place each tick.
pub struct CabinScene {
    pub embers: ParticlePool<Ember>,
    pub fire_glows: ParticlePool<Glow>,
    pub snowflakes: ParticlePool<Snowflake>,
    pub steam: ParticlePool<SteamPuff>,
    pub floor_reflections: ParticlePool<Glow>,
    pub window_reflections: ParticlePool<Glow>,
    pub ambient_lights: ParticlePool<Glow>,
    pub shadows: ParticlePool<Shadow>,
    rng: StdRng,
    ticks: u64,
}

impl CabinScene {
    pub fn new(config: &CabinConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &CabinConfig, mut rng: StdRng) -> Self {
        let counts = config.counts;
        let scene = Self {
            embers: ParticlePool::new(config.fire.clone(), counts.embers, &mut rng),
            fire_glows: ParticlePool::new(config.fire_glow.clone(), counts.fire_glows, &mut rng),
            snowflakes: ParticlePool::new(config.snow.clone(), counts.snowflakes, &mut rng),
            steam: ParticlePool::new(config.steam.clone(), counts.steam, &mut rng),
            floor_reflections: ParticlePool::new(
                config.floor_reflection.clone(),
                counts.floor_reflections,
                &mut rng,
            ),
            window_reflections: ParticlePool::new(
                config.window_reflection.clone(),
                counts.window_reflections,
                &mut rng,
            ),
            ambient_lights: ParticlePool::new(
                config.ambient_light.clone(),
                counts.ambient_lights,
                &mut rng,
            ),
            shadows: ParticlePool::new(config.shadow.clone(), counts.shadows, &mut rng),
            rng,
            ticks: 0,
        };
        log::debug!("Cabin scene built with {} particles", scene.particle_count());
        scene
    }

    /// Advance every pool by one tick. `time` is seconds since start and only
    /// feeds the snow sway.
    pub fn update(&mut self, time: f32) {
        let tick = Tick { time };
        let rng = &mut self.rng;

        self.embers.update(&tick, rng);
        self.fire_glows.update(&tick, rng);
        self.snowflakes.update(&tick, rng);
        self.steam.update(&tick, rng);
        self.floor_reflections.update(&tick, rng);
        self.window_reflections.update(&tick, rng);
        self.ambient_lights.update(&tick, rng);
        self.shadows.update(&tick, rng);

        self.ticks += 1;
    }

    /// Number of updates applied so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn particle_count(&self) -> usize {
        self.embers.len()
            + self.fire_glows.len()
            + self.snowflakes.len()
            + self.steam.len()
            + self.floor_reflections.len()
            + self.window_reflections.len()
            + self.ambient_lights.len()
            + self.shadows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> CabinScene {
        CabinScene::with_rng(&CabinConfig::default(), StdRng::seed_from_u64(42))
    }

    fn pool_sizes(scene: &CabinScene) -> [usize; 8] {
        [
            scene.embers.len(),
            scene.fire_glows.len(),
            scene.snowflakes.len(),
            scene.steam.len(),
            scene.floor_reflections.len(),
            scene.window_reflections.len(),
            scene.ambient_lights.len(),
            scene.shadows.len(),
        ]
    }

    #[test]
    fn pools_start_at_configured_sizes() {
        let scene = scene();
        assert_eq!(pool_sizes(&scene), [80, 15, 150, 20, 8, 6, 4, 5]);
        assert_eq!(scene.particle_count(), 288);
    }

    #[test]
    fn pool_sizes_never_change() {
        let mut scene = scene();
        for i in 0..2000 {
            scene.update(i as f32 * 0.03);
        }
        assert_eq!(pool_sizes(&scene), [80, 15, 150, 20, 8, 6, 4, 5]);
        assert_eq!(scene.ticks(), 2000);
    }

    #[test]
    fn long_run_keeps_every_alpha_visible() {
        let mut scene = scene();
        for i in 0..3000 {
            scene.update(i as f32 * 0.03);
            assert!(scene.fire_glows.iter().all(|g| g.alpha > 0.0));
            assert!(scene.floor_reflections.iter().all(|g| g.alpha > 0.0));
            assert!(scene.window_reflections.iter().all(|g| g.alpha > 0.0));
            assert!(scene.ambient_lights.iter().all(|g| g.alpha > 0.0));
            assert!(scene.shadows.iter().all(|s| s.alpha > 0.0));
            assert!(scene.steam.iter().all(|p| p.alpha > 0.0));
        }
    }

    #[test]
    fn update_moves_particles() {
        let mut scene = scene();
        let before: Vec<f32> = scene.snowflakes.iter().map(|s| s.y).collect();
        scene.update(0.0);
        let after: Vec<f32> = scene.snowflakes.iter().map(|s| s.y).collect();
        assert_ne!(before, after);
    }
}
