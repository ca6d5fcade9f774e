//! Fixed-interval animation timer driven from the UI frame loop.
//!
//! egui has no timer callback, so the app polls once per frame and asks for a
//! repaint at the next deadline. Late ticks coalesce into one, the way a
//! toolkit timer drops ticks the event thread could not keep up with.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AnimationTimer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl AnimationTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }

    /// Start ticking. No-op while already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_deadline.is_none() {
            self.next_deadline = Some(now + self.interval);
        }
    }

    /// Stop ticking. No-op while already stopped.
    pub fn stop(&mut self) {
        self.next_deadline = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Returns true when a tick is due, at most once per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let next = deadline + self.interval;
        // Fell more than a whole interval behind: resync instead of bursting.
        self.next_deadline = Some(if next <= now { now + self.interval } else { next });
        true
    }

    /// Time until the next tick, or None while stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
