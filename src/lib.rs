#![no_std]

pub mod animation;
pub mod color;
pub mod frame_scheduler;
pub mod math8;
pub mod surface;
pub mod timeout;

pub use animation::{
    Animation, AnimationId, AnimationSlot, FireAnimation, RippleAnimation, RippleCurve,
    SpinningAnimation,
};
pub use color::{BLACK, Rgb, Rgbw, heat_color, rgbw, shift_color};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use surface::{PixelFrame, PixelStrip, SmartLedsOutput, Strip, Surface};
pub use timeout::Timeout;

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Strips are generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgbw]);
}
