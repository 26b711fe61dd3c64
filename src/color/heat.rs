//! Heat to color mapping used by the fire animation
//!
//! Based on the `HeatColor` heuristic from `FastLED`: the temperature is
//! compressed to 0-191 and split into three 64-step bands
//! (dim red, red to yellow, yellow to white).

use crate::{
    color::{Rgbw, rgbw},
    math8::scale8_video,
};

const HEAT_SCALE: u8 = 192;
const HOTTEST_BIT: u8 = 0x80;
const MIDDLE_BIT: u8 = 0x40;
const RAMP_MASK: u8 = 0x3F;

/// Translate a temperature (0-255) into a color representing its heat
///
/// The white channel is always off.
pub const fn heat_color(temperature: u8) -> Rgbw {
    let t192 = scale8_video(temperature, HEAT_SCALE);
    let heatramp = (t192 & RAMP_MASK) << 2;

    if t192 & HOTTEST_BIT != 0 {
        rgbw(0xFF, 0xFF, heatramp, 0)
    } else if t192 & MIDDLE_BIT != 0 {
        rgbw(0xFF, heatramp, 0, 0)
    } else {
        rgbw(heatramp, 0, 0, 0)
    }
}
