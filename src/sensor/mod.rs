//! Sensor reader
//!
//! Wraps the raw light and tilt drivers and turns their values into
//! normalized readings. The light sensor is read on every tick, the
//! accelerometer is rate limited by [`TiltSampler`].

mod light;
mod tilt;

pub use light::{LightLevel, LightReader};
pub use tilt::{TiltReading, TiltSampler};

/// Acceleration along the three axes, in g
///
/// Each axis is nominally within `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Acceleration {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Ambient light sensor returning raw ADC counts
pub trait LightSensor {
    type Error;

    /// Read one raw sample, nominally within `[0, LIGHT_RAW_MAX]`
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

/// Three axis accelerometer
pub trait TiltSensor {
    type Error;

    /// Read the current acceleration vector
    fn read_acceleration(&mut self) -> Result<Acceleration, Self::Error>;
}
