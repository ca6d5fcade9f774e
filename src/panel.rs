//! Animated panel state: the scene plus the timer that advances it.

use std::time::{Duration, Instant};

use crate::scene::CabinScene;
use crate::timer::AnimationTimer;

pub struct AnimatedPanel {
    pub scene: CabinScene,
    timer: AnimationTimer,
    started: Instant,
}

impl AnimatedPanel {
    pub fn new(scene: CabinScene, tick_interval: Duration, now: Instant) -> Self {
        Self {
            scene,
            timer: AnimationTimer::new(tick_interval),
            started: now,
        }
    }

    pub fn play_animation(&mut self, now: Instant) {
        self.timer.start(now);
    }

    /// Freeze on the last frame.
    pub fn stop_animation(&mut self) {
        self.timer.stop();
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.timer.is_running()
    }

    /// Advance the scene if a tick is due. Returns true when it changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        let time = now.saturating_duration_since(self.started).as_secs_f32();
        self.scene.update(time);
        true
    }

    /// How long the UI may sleep before the next tick.
    pub fn repaint_delay(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }
}
