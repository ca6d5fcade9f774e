//! Play/Stop control: drives the fireplace clip and the animation together.

use std::time::Instant;

use crate::audio::LoopingClip;
use crate::panel::AnimatedPanel;

pub struct PlaybackController {
    /// None when the clip failed to load; audio actions become no-ops.
    clip: Option<Box<dyn LoopingClip>>,
}

impl PlaybackController {
    pub fn new(clip: Option<Box<dyn LoopingClip>>) -> Self {
        Self { clip }
    }

    pub fn has_audio(&self) -> bool {
        self.clip.is_some()
    }

    /// Restart the clip from the top in loop mode and start the animation.
    pub fn play(&mut self, panel: &mut AnimatedPanel, now: Instant) {
        if let Some(clip) = self.clip.as_mut() {
            clip.restart_looping();
        }
        panel.play_animation(now);
        log::info!("Playing (audio: {})", self.has_audio());
    }

    /// Stop the clip and freeze the animation on its last frame.
    pub fn stop(&mut self, panel: &mut AnimatedPanel) {
        if let Some(clip) = self.clip.as_mut() {
            clip.stop();
        }
        panel.stop_animation();
        log::info!("Stopped after {} ticks", panel.scene.ticks());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CabinConfig;
    use crate::scene::CabinScene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const TICK: Duration = Duration::from_millis(30);

    #[derive(Debug, Clone, PartialEq)]
    enum ClipEvent {
        Restart,
        Stop,
    }

    /// Records what the controller asked of the clip.
    struct FakeClip(Rc<RefCell<Vec<ClipEvent>>>);

    impl LoopingClip for FakeClip {
        fn restart_looping(&mut self) {
            self.0.borrow_mut().push(ClipEvent::Restart);
        }

        fn stop(&mut self) {
            self.0.borrow_mut().push(ClipEvent::Stop);
        }
    }

    fn panel(now: Instant) -> AnimatedPanel {
        let scene = CabinScene::with_rng(&CabinConfig::default(), StdRng::seed_from_u64(1));
        AnimatedPanel::new(scene, TICK, now)
    }

    #[test]
    fn stop_without_audio_still_halts_animation() {
        let t0 = Instant::now();
        let mut panel = panel(t0);
        let mut controller = PlaybackController::new(None);
        assert!(!controller.has_audio());

        controller.play(&mut panel, t0);
        assert!(panel.is_animating());

        controller.stop(&mut panel);
        assert!(!panel.is_animating());
        assert!(!panel.poll(t0 + TICK * 3));
    }

    #[test]
    fn stop_then_play_resumes_and_restarts_clip() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let t0 = Instant::now();
        let mut panel = panel(t0);
        let mut controller = PlaybackController::new(Some(Box::new(FakeClip(events.clone()))));

        controller.play(&mut panel, t0);
        assert!(panel.poll(t0 + TICK));
        controller.stop(&mut panel);

        let t1 = t0 + Duration::from_secs(2);
        controller.play(&mut panel, t1);
        let before: Vec<f32> = panel.scene.embers.iter().map(|e| e.y).collect();
        assert!(panel.poll(t1 + TICK));
        let after: Vec<f32> = panel.scene.embers.iter().map(|e| e.y).collect();

        assert_ne!(before, after);
        assert_eq!(
            *events.borrow(),
            vec![ClipEvent::Restart, ClipEvent::Stop, ClipEvent::Restart]
        );
    }

    #[test]
    fn repeated_play_keeps_a_single_timer() {
        let t0 = Instant::now();
        let mut panel = panel(t0);
        let mut controller = PlaybackController::new(None);

        controller.play(&mut panel, t0);
        controller.play(&mut panel, t0 + Duration::from_millis(20));
        assert!(panel.poll(t0 + TICK));
        assert_eq!(panel.scene.ticks(), 1);
    }
}
