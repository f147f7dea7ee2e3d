//! Monotonic time source for the control loop.

use embassy_time::Instant;

/// Monotonic clock consulted once per tick
///
/// Injected into the loop driver so tests can drive time by hand.
pub trait Clock {
    /// Current monotonic time
    fn now(&mut self) -> Instant;
}

/// Clock backed by the `embassy-time` driver of the platform
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }
}
