#![no_std]

pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod decision;
pub mod error;
pub mod event;
pub mod math;
pub mod output;
pub mod renderer;
pub mod sensor;
pub mod smoothing;

pub use clock::{Clock, SystemClock};
pub use color::Rgb;
pub use config::{ControllerConfig, I2C_FREQUENCY_HZ, LED_COUNT, LIGHT_RAW_MAX};
pub use controller::{Controller, TickKind, TickReport};
pub use decision::{TiltState, decide_target};
pub use error::ControlError;
pub use event::{EVENT_CHANNEL_SIZE, EventChannel, EventPublisher, EventSubscriber, LoopEvent};
pub use output::SmartLedsOutput;
pub use renderer::Renderer;
pub use sensor::{
    Acceleration, LightLevel, LightReader, LightSensor, TiltReading, TiltSampler, TiltSensor,
};
pub use smoothing::ColorSmoother;

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Error reported by the strip when a frame can not be committed
    type Error;

    /// Write colors to the LED strip and commit them in a single flush
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
