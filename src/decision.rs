//! Decision engine
//!
//! Maps the light level and an optional fresh tilt reading to the color the
//! smoother should converge to. The light override always wins, then the
//! tilt thresholds are checked in a fixed order.

use crate::color::{BLUE, GREEN, RED, Rgb};
use crate::config::ControllerConfig;
use crate::sensor::{LightLevel, TiltReading};

const TILT_STATE_NAME_LEVEL: &str = "green";
const TILT_STATE_NAME_PITCHED: &str = "red";
const TILT_STATE_NAME_ROLLED: &str = "blue";

/// Discrete tilt state derived from a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltState {
    /// Both axes within their thresholds
    Level,
    /// X axis beyond its threshold (forward / backward)
    Pitched,
    /// Only the Y axis beyond its threshold (left / right)
    Rolled,
}

impl TiltState {
    /// Classify a reading, first match wins
    ///
    /// X takes priority over Y when both exceed their thresholds. Returns
    /// `None` when no condition holds, e.g. for a NaN axis.
    pub fn classify(reading: TiltReading, config: &ControllerConfig) -> Option<Self> {
        let x = libm::fabsf(reading.angle_x);
        let y = libm::fabsf(reading.angle_y);

        if x <= config.tilt_threshold_x && y <= config.tilt_threshold_y {
            Some(Self::Level)
        } else if x > config.tilt_threshold_x {
            Some(Self::Pitched)
        } else if y > config.tilt_threshold_y {
            Some(Self::Rolled)
        } else {
            None
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            Self::Level => GREEN,
            Self::Pitched => RED,
            Self::Rolled => BLUE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Level => TILT_STATE_NAME_LEVEL,
            Self::Pitched => TILT_STATE_NAME_PITCHED,
            Self::Rolled => TILT_STATE_NAME_ROLLED,
        }
    }
}

/// Whether the light level triggers the override
#[inline]
pub fn is_override(light: LightLevel, config: &ControllerConfig) -> bool {
    light.percent() > config.light_threshold
}

/// Compute the new target color
///
/// Pure function of its inputs: override first, then the tilt reading if one
/// was sampled this tick and matched a state, otherwise the previous target stands.
pub fn decide_target(
    light: LightLevel,
    tilt: Option<TiltReading>,
    previous: Rgb,
    config: &ControllerConfig,
) -> Rgb {
    if is_override(light, config) {
        return GREEN;
    }
    tilt.and_then(|reading| TiltState::classify(reading, config))
        .map_or(previous, TiltState::color)
}
