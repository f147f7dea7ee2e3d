//! Adapter from [`smart_leds::SmartLedsWrite`] strips to [`OutputDriver`].

use smart_leds::SmartLedsWrite;

use crate::{OutputDriver, color::Rgb};

/// Drives any `smart-leds` compatible strip (WS2812 over RMT, SPI, ...)
pub struct SmartLedsOutput<W> {
    strip: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(strip: W) -> Self {
        Self { strip }
    }

    pub fn into_inner(self) -> W {
        self.strip
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.strip.write(colors.iter().copied())
    }
}
