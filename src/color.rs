use smart_leds::RGB8;

use crate::math::scale_percent;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// Scale every channel of a color by a percentage (0-100), truncating
pub const fn scale_color(color: Rgb, percent: u8) -> Rgb {
    Rgb {
        r: scale_percent(color.r, percent),
        g: scale_percent(color.g, percent),
        b: scale_percent(color.b, percent),
    }
}
