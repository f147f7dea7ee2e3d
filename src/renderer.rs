//! Renderer
//!
//! Scales the displayed color by the measured brightness and fills the whole
//! frame with it. Every pixel always holds the same value.

use crate::color::{Rgb, scale_color};
use crate::sensor::LightLevel;

/// Frame buffer for a strip of `N` LEDs
pub struct Renderer<const N: usize> {
    frame_buffer: [Rgb; N],
}

impl<const N: usize> Renderer<N> {
    pub const fn new() -> Self {
        Self {
            frame_buffer: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }

    /// Render a displayed color at the given brightness
    ///
    /// Returns the frame, ready to be written to the strip.
    pub fn render(&mut self, display: Rgb, light: LightLevel) -> &[Rgb] {
        self.fill(scale_color(display, light.percent()))
    }

    /// Fill every pixel with `color` as is
    pub fn fill(&mut self, color: Rgb) -> &[Rgb] {
        for pixel in &mut self.frame_buffer {
            *pixel = color;
        }
        &self.frame_buffer
    }

    /// The last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Color currently held by every pixel
    pub fn color(&self) -> Rgb {
        self.frame_buffer.first().copied().unwrap_or_default()
    }
}

impl<const N: usize> Default for Renderer<N> {
    fn default() -> Self {
        Self::new()
    }
}
