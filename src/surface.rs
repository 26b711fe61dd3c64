//! Pixel surfaces animations draw into
//!
//! A [`Surface`] is the animation's view of one LED strip: an indexed RGBW
//! buffer with a global brightness, a monotonic clock and a `show` operation
//! that commits the buffer to the hardware. [`PixelStrip`] is the concrete
//! surface: it owns the buffer, the output driver and the attached
//! animation.

use core::fmt::Debug;

use embassy_time::{Duration, Instant};
use rand::{RngCore, rngs::SmallRng};
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    animation::AnimationSlot,
    color::{BLACK, Rgbw, scale_rgbw},
};

/// Default strip brightness (0-255)
pub const DEFAULT_BRIGHTNESS: u8 = 204;

/// Indexed pixel buffer that animations render into
pub trait Surface {
    /// Pixel buffer, one slot per LED
    fn pixels(&self) -> &[Rgbw];

    /// Mutable pixel buffer, one slot per LED
    fn pixels_mut(&mut self) -> &mut [Rgbw];

    /// Commit the buffer to the hardware
    ///
    /// Brightness is applied here, the buffer itself stays unscaled.
    fn show(&mut self);

    /// Current monotonic time
    fn now(&self) -> Instant;

    /// Global brightness (0-255)
    fn brightness(&self) -> u8;

    /// Set global brightness (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Number of pixels
    fn len(&self) -> usize {
        self.pixels().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turn every pixel off
    fn clear(&mut self) {
        self.pixels_mut().fill(BLACK);
    }

    /// Read a pixel, `None` when out of range
    fn get(&self, index: usize) -> Option<Rgbw> {
        self.pixels().get(index).copied()
    }

    /// Write a pixel, ignored when out of range
    fn set(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            *pixel = color;
        }
    }
}

/// Something the frame scheduler can draw once per tick
pub trait Strip {
    /// Advance the attached animation to `now` and render one frame
    fn draw(&mut self, now: Instant);
}

/// Frame buffer plus output, the part of a strip animations borrow
pub struct PixelFrame<const N: usize, D: OutputDriver> {
    pixels: [Rgbw; N],
    output: [Rgbw; N],
    brightness: u8,
    now: Instant,
    driver: D,
}

impl<const N: usize, D: OutputDriver> PixelFrame<N, D> {
    /// Create a cleared frame writing to `driver`
    pub const fn new(driver: D) -> Self {
        Self {
            pixels: [BLACK; N],
            output: [BLACK; N],
            brightness: DEFAULT_BRIGHTNESS,
            now: Instant::from_ticks(0),
            driver,
        }
    }

    /// Get a reference to the output driver
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the output driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<const N: usize, D: OutputDriver> Surface for PixelFrame<N, D> {
    fn pixels(&self) -> &[Rgbw] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [Rgbw] {
        &mut self.pixels
    }

    fn show(&mut self) {
        for (out, pixel) in self.output.iter_mut().zip(self.pixels.iter()) {
            *out = scale_rgbw(*pixel, self.brightness);
        }
        self.driver.write(&self.output);
    }

    fn now(&self) -> Instant {
        self.now
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

/// LED strip with an attached animation
///
/// `N` is the number of LEDs. `R` is the random source used by the fire
/// animation.
pub struct PixelStrip<const N: usize, D: OutputDriver, R: RngCore = SmallRng> {
    frame: PixelFrame<N, D>,
    animation: Option<AnimationSlot<N, R>>,
    last_draw: Option<Instant>,
}

impl<const N: usize, D: OutputDriver, R: RngCore> PixelStrip<N, D, R> {
    /// Create a strip without an animation
    pub const fn new(driver: D) -> Self {
        Self {
            frame: PixelFrame::new(driver),
            animation: None,
            last_draw: None,
        }
    }

    /// Set the initial brightness
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.frame.set_brightness(brightness);
        self
    }

    /// Attach an animation and reset it against this strip
    pub fn set_animation(&mut self, mut animation: AnimationSlot<N, R>, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[strip] attach animation: {}", animation.id().as_str());

        self.frame.now = now;
        animation.reset(&mut self.frame);
        self.animation = Some(animation);
        self.last_draw = Some(now);
    }

    /// Detach the current animation, leaving the buffer as it is
    pub fn take_animation(&mut self) -> Option<AnimationSlot<N, R>> {
        self.last_draw = None;
        self.animation.take()
    }

    pub const fn animation(&self) -> Option<&AnimationSlot<N, R>> {
        self.animation.as_ref()
    }

    pub fn animation_mut(&mut self) -> Option<&mut AnimationSlot<N, R>> {
        self.animation.as_mut()
    }

    /// Get a reference to the frame
    pub const fn frame(&self) -> &PixelFrame<N, D> {
        &self.frame
    }

    /// Get a mutable reference to the frame
    pub fn frame_mut(&mut self) -> &mut PixelFrame<N, D> {
        &mut self.frame
    }

    /// Time elapsed since the previous frame, zero on the first one
    fn elapsed(&self, now: Instant) -> Duration {
        self.last_draw
            .and_then(|last| now.checked_duration_since(last))
            .unwrap_or(Duration::from_ticks(0))
    }
}

impl<const N: usize, D: OutputDriver, R: RngCore> Strip for PixelStrip<N, D, R> {
    fn draw(&mut self, now: Instant) {
        let delta = self.elapsed(now);
        self.last_draw = Some(now);
        self.frame.now = now;

        if let Some(animation) = self.animation.as_mut() {
            animation.tick(&mut self.frame, delta);
        }
    }
}

/// Adapter from any `smart-leds` RGBW writer to [`OutputDriver`]
///
/// A failed write drops that frame. The error is kept until
/// [`take_error`](Self::take_error) collects it, and printed with the
/// `esp32-log` feature.
pub struct SmartLedsOutput<W: SmartLedsWrite> {
    writer: W,
    last_error: Option<W::Error>,
}

impl<W: SmartLedsWrite> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Error of the most recent failed write, if any
    pub fn take_error(&mut self) -> Option<W::Error> {
        self.last_error.take()
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgbw>,
    W::Error: Debug,
{
    fn write(&mut self, colors: &[Rgbw]) {
        if let Err(error) = self.writer.write(colors.iter().copied()) {
            #[cfg(feature = "esp32-log")]
            println!("[strip] write failed: {error:?}");

            self.last_error = Some(error);
        }
    }
}
