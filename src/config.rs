//! Startup configuration of the control loop.
//!
//! Board level values (bus frequency, pixel count, ADC domain) are plain
//! constants. Tunables the loop consults every tick live in [`ControllerConfig`].

use embassy_time::Duration;

/// I2C bus frequency the tilt sensor is wired for
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// The number of LEDs in the strip we are driving
pub const LED_COUNT: usize = 30;

/// Upper bound of the raw ambient light ADC domain (12 bit, 11 dB attenuation)
pub const LIGHT_RAW_MAX: u16 = 4095;

/// Default tilt magnitude beyond which the X axis counts as tilted
pub const DEFAULT_TILT_THRESHOLD_X: f32 = 500.0;

/// Default tilt magnitude beyond which the Y axis counts as tilted
pub const DEFAULT_TILT_THRESHOLD_Y: f32 = 500.0;

/// Default light level above which the override forces green
pub const DEFAULT_LIGHT_THRESHOLD: u8 = 70;

/// Factor applied to the raw accelerometer axis to get an angle
pub const DEFAULT_TILT_SCALE: f32 = 90.0;

/// Minimum time between two accelerometer samples
pub const DEFAULT_TILT_SAMPLE_PERIOD: Duration = Duration::from_millis(100);

/// Delay after a normal tick
pub const DEFAULT_NORMAL_TICK_DELAY: Duration = Duration::from_millis(10);

/// Delay after an override tick
pub const DEFAULT_OVERRIDE_TICK_DELAY: Duration = Duration::from_millis(50);

/// Configuration for the control loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Threshold for `|angle_x|`, compared against the scaled angle
    pub tilt_threshold_x: f32,
    /// Threshold for `|angle_y|`, compared against the scaled angle
    pub tilt_threshold_y: f32,
    /// Light level (0-100) above which the override is active
    pub light_threshold: u8,
    /// Multiplier turning a raw axis value into an angle
    pub tilt_scale: f32,
    /// Top of the raw light sensor domain
    pub light_raw_max: u16,
    /// Minimum period between accelerometer samples
    pub tilt_sample_period: Duration,
    /// Sleep after a normal tick
    pub normal_tick_delay: Duration,
    /// Sleep after an override tick
    pub override_tick_delay: Duration,
}

impl ControllerConfig {
    pub const fn new() -> Self {
        Self {
            tilt_threshold_x: DEFAULT_TILT_THRESHOLD_X,
            tilt_threshold_y: DEFAULT_TILT_THRESHOLD_Y,
            light_threshold: DEFAULT_LIGHT_THRESHOLD,
            tilt_scale: DEFAULT_TILT_SCALE,
            light_raw_max: LIGHT_RAW_MAX,
            tilt_sample_period: DEFAULT_TILT_SAMPLE_PERIOD,
            normal_tick_delay: DEFAULT_NORMAL_TICK_DELAY,
            override_tick_delay: DEFAULT_OVERRIDE_TICK_DELAY,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
