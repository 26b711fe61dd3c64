//! Countdown used by animations that step at a fixed pace
//!
//! The owner of the animation advances the countdown with the time elapsed
//! since the previous frame. Once it reaches zero it stays timed out until
//! it is armed again, so a coarse tick never triggers the step twice.

use embassy_time::Duration;

const ZERO: Duration = Duration::from_ticks(0);

/// Countdown timer, disarmed by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeout {
    remaining: Option<Duration>,
}

impl Timeout {
    /// Create a disarmed timeout
    pub const fn new() -> Self {
        Self { remaining: None }
    }

    /// Start counting down from `duration`
    pub fn arm(&mut self, duration: Duration) {
        self.remaining = Some(duration);
    }

    /// Stop counting down
    pub fn disarm(&mut self) {
        self.remaining = None;
    }

    /// Remaining time, if armed
    pub const fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advance the countdown by `elapsed`, saturating at zero
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.checked_sub(elapsed).unwrap_or(ZERO);
        }
    }

    /// Check if the countdown has reached zero
    pub fn is_timed_out(&self) -> bool {
        self.remaining == Some(ZERO)
    }
}
