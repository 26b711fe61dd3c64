//! Ripple effect
//!
//! Pixels fade in and out of color, driven by the sum of several sine
//! curves sampled at the current time. The averaged curve value selects a
//! position on a piecewise-linear color gradient. The effect keeps no
//! per-frame state: the same instant always renders the same frame.

use core::f64::consts::TAU;

use embassy_time::Duration;
use heapless::Vec;
use libm::{fmod, sin};

use super::Animation;
use crate::{
    color::{Rgbw, rgbw, shift_color},
    surface::Surface,
};

/// Maximum number of gradient colors
pub const MAX_GRADIENT_COLORS: usize = 8;

/// Maximum number of sine curves
pub const MAX_RIPPLE_CURVES: usize = 8;

const DEFAULT_CYCLE_TIME: f32 = 40.0;
const DEFAULT_X_SPAN: f32 = 100.0;

const DEFAULT_COLORS: [Rgbw; 4] = [
    rgbw(0, 0, 0, 0),
    rgbw(255, 0, 0, 0),
    rgbw(128, 128, 0, 0),
    rgbw(0, 0, 0, 0),
];

const DEFAULT_CURVES: [RippleCurve; 3] = [
    RippleCurve::new(0.125, 1.0, 1.0),
    RippleCurve::new(0.156, 0.8, 0.9),
    RippleCurve::new(0.100, 1.1, 1.1),
];

/// One sine component of the ripple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleCurve {
    /// Spatial scale, relative to the x span
    pub wavelength: f32,
    /// Weight of the curve in the average
    pub amplitude: f32,
    /// Period scale, relative to the cycle time
    pub duration: f32,
}

impl RippleCurve {
    pub const fn new(wavelength: f32, amplitude: f32, duration: f32) -> Self {
        Self {
            wavelength,
            amplitude,
            duration,
        }
    }

    /// Evaluate the curve at pixel `x` and time `m` (milliseconds)
    fn sample(&self, x: f64, m: f64, cycle_time: f64, x_span: f64) -> f64 {
        let s = f64::from(self.duration) * cycle_time;
        let t0 = (fmod(m, s * 2.0) - s) / s;
        let t = TAU * sin(TAU * t0);
        sin(t + TAU * x / (f64::from(self.wavelength) * 2.0 * x_span))
            * f64::from(self.amplitude)
    }
}

#[derive(Debug, Clone)]
pub struct RippleAnimation {
    colors: Vec<Rgbw, MAX_GRADIENT_COLORS>,
    curves: Vec<RippleCurve, MAX_RIPPLE_CURVES>,
    /// Time base of the curves, multiplied by each curve's duration
    cycle_time: f32,
    /// Spatial base of the curves, in pixels
    x_span: f32,
}

impl Default for RippleAnimation {
    fn default() -> Self {
        Self::new(&DEFAULT_COLORS, &DEFAULT_CURVES)
    }
}

impl RippleAnimation {
    /// Create a ripple over a gradient of `colors` driven by `curves`
    ///
    /// # Panics
    ///
    /// Requires 2 to [`MAX_GRADIENT_COLORS`] colors and 1 to
    /// [`MAX_RIPPLE_CURVES`] curves.
    pub fn new(colors: &[Rgbw], curves: &[RippleCurve]) -> Self {
        assert!(
            (2..=MAX_GRADIENT_COLORS).contains(&colors.len()),
            "ripple needs 2 to 8 gradient colors"
        );
        assert!(
            (1..=MAX_RIPPLE_CURVES).contains(&curves.len()),
            "ripple needs 1 to 8 curves"
        );

        Self {
            colors: colors.iter().copied().collect(),
            curves: curves.iter().copied().collect(),
            cycle_time: DEFAULT_CYCLE_TIME,
            x_span: DEFAULT_X_SPAN,
        }
    }

    /// Set the time base of the curves
    #[must_use]
    pub fn with_cycle_time(mut self, cycle_time: f32) -> Self {
        self.cycle_time = cycle_time;
        self
    }

    /// Set the spatial base of the curves
    #[must_use]
    pub fn with_x_span(mut self, x_span: f32) -> Self {
        self.x_span = x_span;
        self
    }

    pub fn colors(&self) -> &[Rgbw] {
        &self.colors
    }

    pub fn curves(&self) -> &[RippleCurve] {
        &self.curves
    }

    /// Gradient position (0.0-1.0) of pixel `p` at time `m` (milliseconds)
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, p: usize, m: f64) -> f64 {
        let x = p as f64;
        let cycle_time = f64::from(self.cycle_time);
        let x_span = f64::from(self.x_span);

        let sum: f64 = self
            .curves
            .iter()
            .map(|curve| curve.sample(x, m, cycle_time, x_span))
            .sum();
        let c = sum / self.curves.len() as f64;

        c.clamp(0.0, 1.0)
    }

    /// Map a gradient position (0.0-1.0) to a color
    pub fn shift_color(&self, c: f64) -> Rgbw {
        shift_color(&self.colors, c)
    }

    /// Color of pixel `p` at time `m` (milliseconds)
    pub fn color_at(&self, p: usize, m: f64) -> Rgbw {
        self.shift_color(self.position(p, m))
    }

    /// Render all pixels for time `m` (milliseconds)
    pub fn render(&self, m: f64, leds: &mut [Rgbw]) {
        for (p, led) in leds.iter_mut().enumerate() {
            *led = self.color_at(p, m);
        }
    }
}

impl Animation for RippleAnimation {
    fn reset<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        surface.show();
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw<S: Surface>(&mut self, surface: &mut S, _delta: Duration) {
        let m = surface.now().as_micros() as f64 / 1000.0;
        self.render(m, surface.pixels_mut());
        surface.show();
    }
}
