use crate::config::SplashConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Loading,
    FadingOut,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashFrame {
    /// Progress bar fill, 0..=100.
    pub progress: u32,
    pub phase: SplashPhase,
}

/// Splash screen animation as a function of elapsed time: the bar fills in
/// fixed steps per tick, the screen fades after `hide_after_ms` and is gone
/// `fade_ms` later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplashTimeline {
    config: SplashConfig,
}

impl SplashTimeline {
    pub fn new(config: SplashConfig) -> Self {
        Self { config }
    }

    pub fn tick_ms(&self) -> u32 {
        self.config.tick_ms
    }

    pub fn total_ms(&self) -> u32 {
        self.config.hide_after_ms + self.config.fade_ms
    }

    pub fn frame_at(&self, elapsed_ms: u32) -> SplashFrame {
        let progress = match elapsed_ms.checked_div(self.config.tick_ms) {
            Some(ticks) => ticks.saturating_mul(self.config.step_percent).min(100),
            None => 100,
        };
        let phase = if elapsed_ms < self.config.hide_after_ms {
            SplashPhase::Loading
        } else if elapsed_ms < self.total_ms() {
            SplashPhase::FadingOut
        } else {
            SplashPhase::Done
        };
        SplashFrame { progress, phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_steps_per_tick() {
        let timeline = SplashTimeline::default();
        assert_eq!(timeline.frame_at(0).progress, 0);
        assert_eq!(timeline.frame_at(29).progress, 0);
        assert_eq!(timeline.frame_at(30).progress, 2);
        assert_eq!(timeline.frame_at(750).progress, 50);
        assert_eq!(timeline.frame_at(1500).progress, 100);
        assert_eq!(timeline.frame_at(1650).progress, 100);
    }

    #[test]
    fn test_phases() {
        let timeline = SplashTimeline::default();
        assert_eq!(timeline.frame_at(1699).phase, SplashPhase::Loading);
        assert_eq!(timeline.frame_at(1700).phase, SplashPhase::FadingOut);
        assert_eq!(timeline.frame_at(1999).phase, SplashPhase::FadingOut);
        assert_eq!(timeline.frame_at(2000).phase, SplashPhase::Done);
        assert_eq!(timeline.total_ms(), 2000);
    }

    #[test]
    fn test_progress_never_decreases() {
        let timeline = SplashTimeline::default();
        let mut last = 0;
        for ms in (0..=timeline.total_ms()).step_by(7) {
            let progress = timeline.frame_at(ms).progress;
            assert!(progress >= last);
            assert!(progress <= 100);
            last = progress;
        }
    }

    #[test]
    fn test_zero_tick_is_full() {
        let timeline = SplashTimeline::new(SplashConfig {
            tick_ms: 0,
            ..SplashConfig::default()
        });
        assert_eq!(timeline.frame_at(0).progress, 100);
    }
}
