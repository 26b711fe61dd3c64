use smart_leds::White;

use crate::{
    color::{Rgb, Rgbw},
    math8::scale8,
};

/// Create an RGBW color from its four channels
#[inline]
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Get the white channel of a color
#[inline]
pub const fn white_of(color: Rgbw) -> u8 {
    color.a.0
}

/// Scale every channel of a color (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_rgbw(color: Rgbw, scale: u8) -> Rgbw {
    rgbw(
        scale8(color.r, scale),
        scale8(color.g, scale),
        scale8(color.b, scale),
        scale8(color.a.0, scale),
    )
}

/// Fold the white channel into RGB, for outputs without a white LED
#[inline]
pub const fn rgbw_to_rgb(color: Rgbw) -> Rgb {
    let w = color.a.0;
    Rgb {
        r: color.r.saturating_add(w),
        g: color.g.saturating_add(w),
        b: color.b.saturating_add(w),
    }
}
