mod gradient;
mod heat;
mod utils;

use smart_leds::{RGB8, RGBW};

pub use gradient::shift_color;
pub use heat::heat_color;
pub use utils::{rgbw, rgbw_to_rgb, scale_rgbw, white_of};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

/// All channels off
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);
