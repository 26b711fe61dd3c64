//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait.

mod fire;
mod ripple;
mod spinning;

use embassy_time::Duration;
use rand::{RngCore, rngs::SmallRng};

pub use fire::FireAnimation;
pub use ripple::{MAX_GRADIENT_COLORS, MAX_RIPPLE_CURVES, RippleAnimation, RippleCurve};
pub use spinning::SpinningAnimation;

use crate::{surface::Surface, timeout::Timeout};

const ANIMATION_NAME_FIRE: &str = "fire";
const ANIMATION_NAME_SPINNING: &str = "spinning";
const ANIMATION_NAME_RIPPLE: &str = "ripple";

const ANIMATION_ID_FIRE: u8 = 0;
const ANIMATION_ID_SPINNING: u8 = 1;
const ANIMATION_ID_RIPPLE: u8 = 2;

pub trait Animation {
    /// Reinitialize internal state and the surface
    ///
    /// Called whenever the animation is (re)attached to a surface.
    fn reset<S: Surface>(&mut self, surface: &mut S);

    /// Advance the animation by `delta` and render one frame
    fn draw<S: Surface>(&mut self, surface: &mut S, delta: Duration);

    /// Pacing countdown, for animations that step at a fixed rate
    fn timeout_mut(&mut self) -> Option<&mut Timeout> {
        None
    }

    /// Advance the pacing countdown, then draw
    fn tick<S: Surface>(&mut self, surface: &mut S, delta: Duration) {
        if let Some(timeout) = self.timeout_mut() {
            timeout.tick(delta);
        }
        self.draw(surface, delta);
    }
}

/// Animation slot - enum containing all possible animations
///
/// `N` is the number of LEDs of the strip the slot is attached to.
#[derive(Debug, Clone)]
pub enum AnimationSlot<const N: usize, R: RngCore = SmallRng> {
    /// Heat diffusion fire
    Fire(FireAnimation<N, R>),
    /// Single pixel travelling along the strip
    Spinning(SpinningAnimation),
    /// Sine-wave ripple through a color gradient
    Ripple(RippleAnimation),
}

/// Known animation ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Fire = ANIMATION_ID_FIRE,
    Spinning = ANIMATION_ID_SPINNING,
    Ripple = ANIMATION_ID_RIPPLE,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_FIRE => Self::Fire,
            ANIMATION_ID_SPINNING => Self::Spinning,
            ANIMATION_ID_RIPPLE => Self::Ripple,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => ANIMATION_NAME_FIRE,
            Self::Spinning => ANIMATION_NAME_SPINNING,
            Self::Ripple => ANIMATION_NAME_RIPPLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_FIRE => Some(Self::Fire),
            ANIMATION_NAME_SPINNING => Some(Self::Spinning),
            ANIMATION_NAME_RIPPLE => Some(Self::Ripple),
            _ => None,
        }
    }
}

impl<const N: usize, R: RngCore> AnimationSlot<N, R> {
    /// Reset the animation against `surface`
    pub fn reset<S: Surface>(&mut self, surface: &mut S) {
        match self {
            Self::Fire(animation) => animation.reset(surface),
            Self::Spinning(animation) => animation.reset(surface),
            Self::Ripple(animation) => animation.reset(surface),
        }
    }

    /// Render one frame without touching the pacing countdown
    pub fn draw<S: Surface>(&mut self, surface: &mut S, delta: Duration) {
        match self {
            Self::Fire(animation) => animation.draw(surface, delta),
            Self::Spinning(animation) => animation.draw(surface, delta),
            Self::Ripple(animation) => animation.draw(surface, delta),
        }
    }

    /// Advance the pacing countdown by `delta` and render one frame
    pub fn tick<S: Surface>(&mut self, surface: &mut S, delta: Duration) {
        match self {
            Self::Fire(animation) => animation.tick(surface, delta),
            Self::Spinning(animation) => animation.tick(surface, delta),
            Self::Ripple(animation) => animation.tick(surface, delta),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Fire(_) => AnimationId::Fire,
            Self::Spinning(_) => AnimationId::Spinning,
            Self::Ripple(_) => AnimationId::Ripple,
        }
    }
}

impl<const N: usize, R: RngCore> From<FireAnimation<N, R>> for AnimationSlot<N, R> {
    fn from(animation: FireAnimation<N, R>) -> Self {
        Self::Fire(animation)
    }
}

impl<const N: usize, R: RngCore> From<SpinningAnimation> for AnimationSlot<N, R> {
    fn from(animation: SpinningAnimation) -> Self {
        Self::Spinning(animation)
    }
}

impl<const N: usize, R: RngCore> From<RippleAnimation> for AnimationSlot<N, R> {
    fn from(animation: RippleAnimation) -> Self {
        Self::Ripple(animation)
    }
}
