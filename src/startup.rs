//! Startup sequencing for the splash timeline
//!
//! The launch timeline is a chain of dependent stages rather than a set of
//! independent wall-clock timers: fade-in completion arms the hold timer,
//! hold expiry starts the fade-out, and fade-out completion (the overlay
//! reaching `Closed`) reveals the main window. Each stage starts only when
//! the previous one has actually finished, so the reveal can never race the
//! fade-out.

use std::time::{Duration, Instant};

use crate::splash::{SplashScreen, SplashState};

/// Fade-in length at launch
pub const FADE_IN: Duration = Duration::from_millis(500);

/// How long the splash stays fully opaque after the fade-in
pub const HOLD: Duration = Duration::from_millis(2500);

/// Fade-out length before the main window is revealed
pub const FADE_OUT: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    FadingIn,
    Holding { until: Instant },
    FadingOut,
    Revealed,
}

/// Drives the splash through its launch timeline, one stage at a time
pub struct StartupSequencer {
    stage: Stage,
}

impl Default for StartupSequencer {
    fn default() -> Self {
        Self {
            stage: Stage::Start,
        }
    }
}

impl StartupSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the main window should be shown. Once true, stays true.
    pub fn is_revealed(&self) -> bool {
        self.stage == Stage::Revealed
    }

    /// Tick the splash and move to the next stage when the current one
    /// completes. Returns `is_revealed()` after advancing.
    pub fn advance(&mut self, splash: &mut SplashScreen, now: Instant) -> bool {
        splash.tick(now);

        match self.stage {
            Stage::Start => {
                splash.fade_in(FADE_IN, now);
                self.stage = Stage::FadingIn;
                log::info!("splash fade-in started");
            }
            Stage::FadingIn => {
                if splash.state() == SplashState::Visible {
                    self.stage = Stage::Holding { until: now + HOLD };
                }
            }
            Stage::Holding { until } => {
                if now >= until {
                    splash.fade_out(FADE_OUT, now);
                    self.stage = Stage::FadingOut;
                    log::info!("splash fade-out started");
                }
            }
            Stage::FadingOut => {
                if splash.is_closed() {
                    self.stage = Stage::Revealed;
                    log::info!("main window revealed");
                }
            }
            Stage::Revealed => {}
        }

        self.is_revealed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Run the sequencer at a fixed step and return the offsets at which
    /// the splash became Visible, Closed, and the main window was revealed.
    fn run_timeline(step: Duration) -> (Duration, Duration, Duration) {
        let t0 = Instant::now();
        let mut splash = SplashScreen::new();
        let mut seq = StartupSequencer::new();

        let mut visible_at = None;
        let mut closed_at = None;
        let mut elapsed = Duration::ZERO;

        loop {
            let revealed = seq.advance(&mut splash, t0 + elapsed);
            if visible_at.is_none() && splash.state() == SplashState::Visible {
                visible_at = Some(elapsed);
            }
            if closed_at.is_none() && splash.is_closed() {
                closed_at = Some(elapsed);
            }
            if revealed {
                return (visible_at.unwrap(), closed_at.unwrap(), elapsed);
            }
            elapsed += step;
            assert!(elapsed < ms(10_000), "sequencer never revealed");
        }
    }

    #[test]
    fn test_stages_run_in_order() {
        let (visible_at, closed_at, revealed_at) = run_timeline(ms(50));
        assert!(visible_at >= FADE_IN);
        assert!(closed_at >= FADE_IN + HOLD + FADE_OUT);
        assert!(revealed_at >= closed_at);
    }

    #[test]
    fn test_reveal_waits_for_fade_out_completion() {
        let t0 = Instant::now();
        let mut splash = SplashScreen::new();
        let mut seq = StartupSequencer::new();

        // Walk to the middle of the fade-out
        let mut now = t0;
        for offset in [0u64, 500, 3000, 3100] {
            now = t0 + ms(offset);
            seq.advance(&mut splash, now);
        }
        assert_eq!(splash.state(), SplashState::FadingOut);
        assert!(!seq.is_revealed());

        // Fade-out completes; the next advance observes Closed and reveals
        seq.advance(&mut splash, t0 + ms(3200));
        assert!(splash.is_closed());
        seq.advance(&mut splash, t0 + ms(3200));
        assert!(seq.is_revealed());
    }

    #[test]
    fn test_revealed_is_sticky() {
        let t0 = Instant::now();
        let mut splash = SplashScreen::new();
        let mut seq = StartupSequencer::new();

        let mut elapsed = Duration::ZERO;
        while !seq.advance(&mut splash, t0 + elapsed) {
            elapsed += ms(100);
        }
        assert!(seq.advance(&mut splash, t0 + elapsed + ms(1000)));
        assert!(splash.is_closed());
    }

    #[test]
    fn test_coarse_ticks_still_reach_reveal() {
        // Even a very coarse frame cadence walks the whole chain
        let (_, _, revealed_at) = run_timeline(ms(700));
        assert!(revealed_at >= FADE_IN + HOLD + FADE_OUT);
    }
}
