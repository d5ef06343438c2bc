//! Splash screen fade lifecycle
//!
//! The splash overlay owns a normalized opacity value (0 = transparent,
//! 1 = opaque) and walks a small one-way state machine:
//!
//! ```text
//! Hidden -> FadingIn -> Visible -> FadingOut -> Closed
//! ```
//!
//! `Closed` is the sole terminal state. There are no error states; the
//! overlay is cosmetic and failure-free by construction. All timing is
//! driven by `Instant`s supplied by the caller, which keeps the machine
//! deterministic under test.

use std::time::{Duration, Instant};

/// Lifecycle state of the splash overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
    Closed,
}

/// An in-flight linear opacity interpolation
#[derive(Debug, Clone, Copy)]
struct Fade {
    started: Instant,
    duration: Duration,
    from: f32,
    to: f32,
}

impl Fade {
    /// Opacity at `now`, clamped to the fade's endpoints
    fn value_at(&self, now: Instant) -> f32 {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(self.started);
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.from + (self.to - self.from) * t
    }

    fn finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// The transient splash overlay state
pub struct SplashScreen {
    state: SplashState,
    opacity: f32,
    fade: Option<Fade>,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self {
            state: SplashState::Hidden,
            opacity: 0.0,
            fade: None,
        }
    }
}

impl SplashScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SplashState {
        self.state
    }

    /// Current opacity in [0, 1]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_closed(&self) -> bool {
        self.state == SplashState::Closed
    }

    /// Begin fading in from fully transparent to fully opaque.
    ///
    /// Only meaningful from `Hidden`; calls in any other state are ignored.
    pub fn fade_in(&mut self, duration: Duration, now: Instant) {
        if self.state != SplashState::Hidden {
            log::debug!("fade_in ignored in state {:?}", self.state);
            return;
        }
        self.state = SplashState::FadingIn;
        self.opacity = 0.0;
        self.fade = Some(Fade {
            started: now,
            duration,
            from: 0.0,
            to: 1.0,
        });
    }

    /// Begin fading out from fully opaque to fully transparent.
    ///
    /// Completion closes the overlay. Calling this on an already-closed
    /// overlay is a no-op, so the overlay closes exactly once.
    pub fn fade_out(&mut self, duration: Duration, now: Instant) {
        if self.state == SplashState::Closed {
            log::debug!("fade_out ignored: overlay already closed");
            return;
        }
        self.state = SplashState::FadingOut;
        self.opacity = 1.0;
        self.fade = Some(Fade {
            started: now,
            duration,
            from: 1.0,
            to: 0.0,
        });
    }

    /// Advance the running interpolation (if any) to `now`.
    ///
    /// A finished fade-in lands in `Visible` with opacity exactly 1.0;
    /// a finished fade-out lands in `Closed` with opacity exactly 0.0.
    pub fn tick(&mut self, now: Instant) {
        let Some(fade) = self.fade else {
            return;
        };

        self.opacity = fade.value_at(now);

        if fade.finished_at(now) {
            self.fade = None;
            match self.state {
                SplashState::FadingIn => {
                    self.opacity = 1.0;
                    self.state = SplashState::Visible;
                }
                SplashState::FadingOut => {
                    self.opacity = 0.0;
                    self.state = SplashState::Closed;
                    log::info!("splash overlay closed");
                }
                _ => {}
            }
        }
    }
}
