//! Particle pools for Cozy Cabin
//! Fixed-size pools of plain value particles. Every kind advances one tick at
//! a time and is overwritten in place when it expires; nothing is ever pushed
//! or removed after the pool is built.

use egui::Color32;
use rand::Rng;

use crate::config::{FireSpec, LightSpec, ShadowSpec, SnowSpec, SteamSpec};

/// Per-tick inputs shared by every pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tick {
    /// Seconds since the scene was built
    pub time: f32,
}

/// Outcome of advancing a particle by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    Alive,
    Expired,
}

/// One visual kind of particle, parameterized by its spec record.
pub trait Particle: Sized {
    type Spec;

    /// Fresh particle with randomized state, used to fill the pool.
    fn spawn<R: Rng + ?Sized>(spec: &Self::Spec, rng: &mut R) -> Self;

    /// Replacement for an expired particle. Defaults to a fresh spawn.
    fn respawn<R: Rng + ?Sized>(spec: &Self::Spec, rng: &mut R) -> Self {
        Self::spawn(spec, rng)
    }

    fn advance<R: Rng + ?Sized>(&mut self, spec: &Self::Spec, tick: &Tick, rng: &mut R) -> Fate;
}

// ============================================================================
// Pool
// ============================================================================

/// Fixed-length pool. The slice is allocated once and only ever written
/// through index-wise, so its length cannot change.
pub struct ParticlePool<P: Particle> {
    spec: P::Spec,
    particles: Box<[P]>,
}

impl<P: Particle> ParticlePool<P> {
    pub fn new<R: Rng + ?Sized>(spec: P::Spec, count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| P::spawn(&spec, rng)).collect();
        Self { spec, particles }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, tick: &Tick, rng: &mut R) {
        let spec = &self.spec;
        for p in self.particles.iter_mut() {
            if p.advance(spec, tick, rng) == Fate::Expired {
                *p = P::respawn(spec, rng);
            }
        }
    }

    pub fn spec(&self) -> &P::Spec {
        &self.spec
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.particles.iter()
    }

    #[cfg(test)]
    pub fn particles_mut(&mut self) -> &mut [P] {
        &mut self.particles
    }
}

// ============================================================================
// Fire
// ============================================================================

/// Rising fire core particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Ember {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed_y: f32,
    pub color: Color32,
}

impl Ember {
    fn randomized<R: Rng + ?Sized>(spec: &FireSpec, y: f32, rng: &mut R) -> Self {
        Self {
            x: spec.region.sample_x(rng),
            y,
            size: rng.gen_range(spec.size.clone()),
            speed_y: rng.gen_range(spec.rise_speed.clone()),
            color: spec.tint.sample(rng),
        }
    }
}

impl Particle for Ember {
    type Spec = FireSpec;

    fn spawn<R: Rng + ?Sized>(spec: &FireSpec, rng: &mut R) -> Self {
        let y = spec.region.sample_y(rng);
        Self::randomized(spec, y, rng)
    }

    /// Embers re-enter at the base of the fire.
    fn respawn<R: Rng + ?Sized>(spec: &FireSpec, rng: &mut R) -> Self {
        Self::randomized(spec, spec.region.bottom(), rng)
    }

    fn advance<R: Rng + ?Sized>(&mut self, spec: &FireSpec, _tick: &Tick, rng: &mut R) -> Fate {
        self.y -= self.speed_y;
        self.x += rng.gen_range(-spec.jitter..spec.jitter);
        self.size *= spec.shrink;

        if self.y < spec.region.top() || self.size < spec.min_size {
            Fate::Expired
        } else {
            Fate::Alive
        }
    }
}

// ============================================================================
// Glows, reflections, ambient light
// ============================================================================

/// Growing, fading light blob centered on `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
    pub growth: f32,
    pub color: Color32,
}

impl Particle for Glow {
    type Spec = LightSpec;

    fn spawn<R: Rng + ?Sized>(spec: &LightSpec, rng: &mut R) -> Self {
        Self {
            x: spec.area.sample_x(rng),
            y: spec.area.sample_y(rng),
            radius: rng.gen_range(spec.radius.clone()),
            alpha: rng.gen_range(spec.alpha.clone()),
            growth: rng.gen_range(spec.growth.clone()),
            color: spec.tint.sample(rng),
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, spec: &LightSpec, _tick: &Tick, _rng: &mut R) -> Fate {
        self.radius += self.growth * spec.growth_scale;
        self.alpha -= spec.fade;

        if self.alpha <= 0.0 {
            Fate::Expired
        } else {
            Fate::Alive
        }
    }
}

// ============================================================================
// Snow
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub speed_y: f32,
    pub drift: f32,
    pub size: u32,
}

impl Particle for Snowflake {
    type Spec = SnowSpec;

    fn spawn<R: Rng + ?Sized>(spec: &SnowSpec, rng: &mut R) -> Self {
        Self {
            x: spec.region.sample_x(rng),
            y: spec.region.sample_y(rng),
            speed_y: rng.gen_range(spec.fall_speed.clone()),
            drift: rng.gen_range(spec.drift.clone()),
            size: rng.gen_range(spec.size.clone()),
        }
    }

    /// Snow never expires; it wraps back to the top of the window.
    fn advance<R: Rng + ?Sized>(&mut self, spec: &SnowSpec, tick: &Tick, rng: &mut R) -> Fate {
        self.y += self.speed_y;
        self.x += (tick.time * spec.sway_rate + self.x).sin() * self.drift;

        if rng.gen_bool(spec.gust_chance) {
            self.x += rng.gen_range(-spec.gust..=spec.gust) as f32;
        }

        if self.y > spec.region.bottom() {
            self.y = spec.region.top();
            self.x = spec.region.sample_x(rng);
        }

        Fate::Alive
    }
}

// ============================================================================
// Steam
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SteamPuff {
    pub x: f32,
    pub y: f32,
    pub alpha: f32,
    pub rise_speed: f32,
    pub drift: f32,
    pub curve_offset: f32,
}

impl SteamPuff {
    fn randomized<R: Rng + ?Sized>(spec: &SteamSpec, x: f32, alpha: f32, rng: &mut R) -> Self {
        Self {
            x,
            y: spec.region.bottom(),
            alpha,
            rise_speed: rng.gen_range(spec.rise_speed.clone()),
            drift: rng.gen_range(spec.drift.clone()),
            curve_offset: rng.gen_range(spec.curve_offset.clone()),
        }
    }
}

impl Particle for SteamPuff {
    type Spec = SteamSpec;

    fn spawn<R: Rng + ?Sized>(spec: &SteamSpec, rng: &mut R) -> Self {
        let x = spec.region.center().x + rng.gen_range(-spec.spread..spec.spread);
        let alpha = rng.gen_range(spec.alpha.clone());
        Self::randomized(spec, x, alpha, rng)
    }

    /// Resets rise straight out of the mug center.
    fn respawn<R: Rng + ?Sized>(spec: &SteamSpec, rng: &mut R) -> Self {
        let alpha = rng.gen_range(spec.reset_alpha.clone());
        Self::randomized(spec, spec.region.center().x, alpha, rng)
    }

    fn advance<R: Rng + ?Sized>(&mut self, spec: &SteamSpec, _tick: &Tick, _rng: &mut R) -> Fate {
        self.y -= self.rise_speed;
        self.x += (self.curve_offset + self.y * spec.curl).sin() * self.drift;
        self.alpha -= spec.fade;

        if self.alpha <= 0.0 || self.y < spec.region.top() {
            Fate::Expired
        } else {
            Fate::Alive
        }
    }
}

// ============================================================================
// Shadows
// ============================================================================

/// Soft oval shadow anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alpha: f32,
}

impl Particle for Shadow {
    type Spec = ShadowSpec;

    fn spawn<R: Rng + ?Sized>(spec: &ShadowSpec, rng: &mut R) -> Self {
        Self {
            x: spec.area.sample_x(rng),
            y: spec.area.sample_y(rng),
            width: rng.gen_range(spec.width.clone()),
            height: rng.gen_range(spec.height.clone()),
            alpha: rng.gen_range(spec.alpha.clone()),
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, spec: &ShadowSpec, _tick: &Tick, _rng: &mut R) -> Fate {
        self.alpha -= spec.fade;

        if self.alpha <= 0.0 {
            Fate::Expired
        } else {
            Fate::Alive
        }
    }
}
