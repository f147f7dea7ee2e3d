use embassy_time::{Duration, Instant};

use super::TiltSensor;
use crate::math::remap_f32;

/// Angle range the telemetry value is derived from
const TELEMETRY_ANGLE_MIN: f32 = -90.0;
const TELEMETRY_ANGLE_MAX: f32 = 90.0;
/// Output range of the telemetry value
const TELEMETRY_MIN: f32 = 0.0;
const TELEMETRY_MAX: f32 = 300.0;

/// Scaled tilt angles of the X and Y axes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltReading {
    pub angle_x: f32,
    pub angle_y: f32,
}

impl TiltReading {
    pub const fn new(angle_x: f32, angle_y: f32) -> Self {
        Self { angle_x, angle_y }
    }

    /// X angle remapped from `[-90, 90]` to `[0, 300]` for external dashboards
    pub fn telemetry_x(&self) -> i32 {
        remap_f32(
            self.angle_x,
            TELEMETRY_ANGLE_MIN,
            TELEMETRY_ANGLE_MAX,
            TELEMETRY_MIN,
            TELEMETRY_MAX,
        )
    }
}

/// Rate limited accelerometer reader
///
/// A new reading is produced only once `period` has strictly elapsed since
/// the last sample. The last sample time starts at zero, so the first sample
/// is taken as soon as the clock passes `period`.
pub struct TiltSampler<S: TiltSensor> {
    sensor: S,
    scale: f32,
    period: Duration,
    last_sample: Instant,
}

impl<S: TiltSensor> TiltSampler<S> {
    pub const fn new(sensor: S, scale: f32, period: Duration) -> Self {
        Self {
            sensor,
            scale,
            period,
            last_sample: Instant::from_millis(0),
        }
    }

    /// Sample the sensor if the period has elapsed
    ///
    /// Returns `Ok(None)` without touching the sensor otherwise.
    pub fn sample(&mut self, now: Instant) -> Result<Option<TiltReading>, S::Error> {
        if now <= self.last_sample + self.period {
            return Ok(None);
        }
        self.last_sample = now;

        let accel = self.sensor.read_acceleration()?;
        Ok(Some(TiltReading {
            angle_x: accel.x * self.scale,
            angle_y: accel.y * self.scale,
        }))
    }

    /// Time of the last actual sample
    pub const fn last_sample(&self) -> Instant {
        self.last_sample
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}
