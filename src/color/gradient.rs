use libm::{ceil, floor};

use crate::color::{Rgbw, rgbw, white_of};

/// Map a fraction `c` (0.0-1.0) onto a piecewise-linear gradient
///
/// The gradient is `colors`, evenly spaced. `c = 0.0` yields the first color
/// and `c = 1.0` the last one. Values outside 0.0-1.0 are clamped.
///
/// # Panics
///
/// Requires at least two colors.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn shift_color(colors: &[Rgbw], c: f64) -> Rgbw {
    assert!(colors.len() >= 2, "gradient needs at least two colors");

    let c = c.clamp(0.0, 1.0);
    let last = colors.len() - 1;
    let segments = last as f64;

    let i0 = (floor(c * segments) as usize).min(last);
    let i1 = (ceil(c * segments) as usize).min(last);

    let c0 = (c - i0 as f64 / segments) * segments;
    let c1 = 1.0 - c0;

    let a = colors[i0];
    let b = colors[i1];
    let mix = |x: u8, y: u8| floor(c0 * f64::from(x) + c1 * f64::from(y)) as u8;

    rgbw(
        mix(a.r, b.r),
        mix(a.g, b.g),
        mix(a.b, b.b),
        mix(white_of(a), white_of(b)),
    )
}
