//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::surface::Strip;

/// Default interval between two ticks.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(20);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that draws several strips per tick.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Draws every strip once per tick, in order
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new();
///
/// loop {
///     let now = Instant::from_millis(get_current_time_ms());
///     let mut strips: [&mut dyn Strip; 2] = [&mut fire, &mut spinner];
///     let result = scheduler.tick(&mut strips, now);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    next_frame: Instant,
    frame_duration: Duration,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (20 ms) for frame timing.
    pub const fn new() -> Self {
        Self::with_frame_duration(DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub const fn with_frame_duration(frame_duration: Duration) -> Self {
        Self {
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Draw every strip once and return timing information.
    ///
    /// If the loop fell behind by more than two frames, the backlog is
    /// dropped instead of caught up.
    pub fn tick(&mut self, strips: &mut [&mut dyn Strip], now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            #[cfg(feature = "esp32-log")]
            println!("[scheduler] dropping backlog at {} ms", now.as_millis());

            self.next_frame = now;
        }

        for strip in strips.iter_mut() {
            strip.draw(now);
        }

        self.next_frame += self.frame_duration;

        let sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }
}
