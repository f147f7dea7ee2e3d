use super::LightSensor;
use crate::math::remap;

/// Ambient light level in percent (0-100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LightLevel(u8);

impl LightLevel {
    pub const MAX: Self = Self(100);

    /// Create a light level, clamping to 100
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    /// Convert a raw ADC sample from `[0, raw_max]` to a level
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_raw(raw: u16, raw_max: u16) -> Self {
        let level = remap(raw as i32, 0, raw_max as i32, 0, 100);
        let level = if level < 0 {
            0
        } else if level > 100 {
            100
        } else {
            level
        };
        Self(level as u8)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

/// Reads the ambient light sensor every tick
pub struct LightReader<S: LightSensor> {
    sensor: S,
    raw_max: u16,
}

impl<S: LightSensor> LightReader<S> {
    pub const fn new(sensor: S, raw_max: u16) -> Self {
        Self { sensor, raw_max }
    }

    /// Read the sensor and normalize the sample
    pub fn read(&mut self) -> Result<LightLevel, S::Error> {
        let raw = self.sensor.read_raw()?;
        Ok(LightLevel::from_raw(raw, self.raw_max))
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}
