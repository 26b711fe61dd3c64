//! One colored pixel travels along the strip
//!
//! The step rate is paced by a [`Timeout`], so the pixel keeps a constant
//! speed whatever the frame rate of the caller.

use embassy_time::Duration;

use super::Animation;
use crate::{color::Rgbw, surface::Surface, timeout::Timeout};

const DEFAULT_CYCLE_MS: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct SpinningAnimation {
    /// Color of the lit pixel
    color: Rgbw,
    /// Duration of one full trip along the strip
    cycle_duration: Duration,
    /// Time spent on each pixel, derived from the strip length on reset
    wait: Duration,
    current_pixel: usize,
    timeout: Timeout,
}

impl SpinningAnimation {
    pub const fn new(color: Rgbw) -> Self {
        Self {
            color,
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_MS),
            wait: Duration::from_millis(DEFAULT_CYCLE_MS / 8),
            current_pixel: 0,
            timeout: Timeout::new(),
        }
    }

    /// Set the cycle duration
    #[must_use]
    pub fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    /// Index of the lit pixel
    pub const fn current_pixel(&self) -> usize {
        self.current_pixel
    }

    /// Time spent on each pixel
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl Animation for SpinningAnimation {
    /// Restart from pixel 0 and arm the first step
    ///
    /// The buffer is cleared but not shown, the first lit pixel reaches the
    /// hardware on the first expiry.
    fn reset<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        self.current_pixel = 0;
        let count = u32::try_from(surface.len()).unwrap_or(u32::MAX).max(1);
        self.wait = self.cycle_duration / count;
        self.timeout.arm(self.wait);
    }

    fn draw<S: Surface>(&mut self, surface: &mut S, _delta: Duration) {
        if !self.timeout.is_timed_out() {
            return;
        }
        self.timeout.arm(self.wait);

        let count = surface.len();
        if count == 0 {
            return;
        }
        self.current_pixel = (self.current_pixel + 1) % count;
        surface.clear();
        surface.set(self.current_pixel, self.color);
        surface.show();
    }

    fn timeout_mut(&mut self) -> Option<&mut Timeout> {
        Some(&mut self.timeout)
    }
}
