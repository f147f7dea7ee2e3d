//! Color smoother
//!
//! Rate limited follower: each step moves every channel at most one unit
//! toward the target and stops exactly on it.

use crate::color::Rgb;
use crate::math::step_toward;

/// Advance `current` one step toward `target`, per channel
pub const fn step(current: Rgb, target: Rgb) -> Rgb {
    Rgb {
        r: step_toward(current.r, target.r),
        g: step_toward(current.g, target.g),
        b: step_toward(current.b, target.b),
    }
}

/// Number of steps needed to reach `target` from `current`
pub const fn steps_to_converge(current: Rgb, target: Rgb) -> u8 {
    let r = current.r.abs_diff(target.r);
    let g = current.g.abs_diff(target.g);
    let b = current.b.abs_diff(target.b);
    let max = if r > g { r } else { g };
    if max > b { max } else { b }
}

/// Displayed color following a target color
#[derive(Debug, Clone)]
pub struct ColorSmoother {
    /// Currently displayed (pre-brightness) color
    current: Rgb,
    /// Color being approached
    target: Rgb,
}

impl ColorSmoother {
    pub const fn new(initial: Rgb) -> Self {
        Self {
            current: initial,
            target: initial,
        }
    }

    /// Get current value
    pub const fn current(&self) -> Rgb {
        self.current
    }

    pub const fn target(&self) -> Rgb {
        self.target
    }

    /// Check if the current color still differs from the target
    pub fn is_transitioning(&self) -> bool {
        self.current != self.target
    }

    /// Set the color to approach
    pub fn set_target(&mut self, target: Rgb) {
        self.target = target;
    }

    /// Jump to a color immediately, without smoothing
    pub fn force(&mut self, color: Rgb) {
        self.current = color;
        self.target = color;
    }

    /// Advance one step and return the new current color
    pub fn tick(&mut self) -> Rgb {
        self.current = step(self.current, self.target);
        self.current
    }
}

impl Default for ColorSmoother {
    fn default() -> Self {
        Self::new(Rgb::default())
    }
}
