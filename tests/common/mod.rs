#![allow(dead_code)]

use tilt_glow::{
    Acceleration, Clock, ControllerConfig, Instant, LightSensor, OutputDriver, Rgb, TiltSensor,
};

/// Raw ADC samples that map exactly onto common light levels
pub const RAW_LEVEL_50: u16 = 2048;
pub const RAW_LEVEL_70: u16 = 2867;
pub const RAW_LEVEL_80: u16 = 3276;
pub const RAW_LEVEL_100: u16 = 4095;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripFault;

pub struct FakeLight {
    pub raw: u16,
    pub reads: usize,
    /// Fail once this many reads have succeeded
    pub fail_after: Option<usize>,
}

impl FakeLight {
    pub fn new(raw: u16) -> Self {
        Self {
            raw,
            reads: 0,
            fail_after: None,
        }
    }
}

impl LightSensor for FakeLight {
    type Error = SensorFault;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        if self.fail_after.is_some_and(|limit| self.reads >= limit) {
            return Err(SensorFault);
        }
        self.reads += 1;
        Ok(self.raw)
    }
}

pub struct FakeTilt {
    pub accel: Acceleration,
    pub reads: usize,
    pub fail: bool,
}

impl FakeTilt {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            accel: Acceleration::new(x, y, 1.0),
            reads: 0,
            fail: false,
        }
    }
}

impl TiltSensor for FakeTilt {
    type Error = SensorFault;

    fn read_acceleration(&mut self) -> Result<Acceleration, Self::Error> {
        if self.fail {
            return Err(SensorFault);
        }
        self.reads += 1;
        Ok(self.accel)
    }
}

#[derive(Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<Rgb>>,
    pub fail: bool,
}

impl RecordingOutput {
    pub fn last(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }
}

impl OutputDriver for RecordingOutput {
    type Error = StripFault;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(StripFault);
        }
        self.frames.push(colors.to_vec());
        Ok(())
    }
}

/// Clock advancing by a fixed step on every read
pub struct FakeClock {
    pub now_ms: u64,
    pub step_ms: u64,
}

impl Clock for FakeClock {
    fn now(&mut self) -> Instant {
        let now = Instant::from_millis(self.now_ms);
        self.now_ms += self.step_ms;
        now
    }
}

/// Config with thresholds reachable by accelerometer values in [-1, 1]
pub fn reachable_thresholds() -> ControllerConfig {
    ControllerConfig {
        tilt_threshold_x: 45.0,
        tilt_threshold_y: 45.0,
        ..ControllerConfig::default()
    }
}
