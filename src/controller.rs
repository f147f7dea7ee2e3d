//! Loop driver
//!
//! Ties the sensors, decision engine, smoother and renderer together, one
//! tick at a time. Each tick returns how long the caller should sleep before
//! the next one, the same contract as a frame scheduler: the controller never
//! sleeps by itself.
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = Controller::<_, _, _, LED_COUNT>::new(light, tilt, strip, config);
//!
//! // Returns only when a sensor or the strip fails
//! let err = controller.run(&mut SystemClock, |delay| embassy_time::block_for(delay));
//! ```

use core::convert::Infallible;

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::clock::Clock;
use crate::color::{GREEN, Rgb};
use crate::config::{ControllerConfig, LED_COUNT};
use crate::decision::{TiltState, decide_target, is_override};
use crate::error::ControlError;
use crate::event::{EVENT_CHANNEL_SIZE, EventPublisher, LoopEvent};
use crate::renderer::Renderer;
use crate::sensor::{LightLevel, LightReader, LightSensor, TiltSampler, TiltSensor};
use crate::smoothing::ColorSmoother;

/// Maximum number of events a single tick can produce
pub const MAX_TICK_EVENTS: usize = 2;

/// Error type of a tick for the given collaborators
pub type TickError<L, T, O> = ControlError<
    <L as LightSensor>::Error,
    <T as TiltSensor>::Error,
    <O as OutputDriver>::Error,
>;

/// Which path a tick took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Light override forced green, tilt and smoothing were skipped
    Override,
    /// Full sensor, decision, smoothing and render pipeline ran
    NormalRendered,
}

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Path the tick took
    pub kind: TickKind,
    /// How long to sleep before the next tick
    pub delay: Duration,
    /// Light level measured this tick
    pub light: LightLevel,
    /// Color written to every pixel
    pub rendered: Rgb,
    /// State transitions observed this tick
    pub events: Vec<LoopEvent, MAX_TICK_EVENTS>,
}

/// Sensor to LED control loop
pub struct Controller<
    'a,
    L,
    T,
    O,
    const N: usize = LED_COUNT,
    const EVENTS: usize = EVENT_CHANNEL_SIZE,
>
where
    L: LightSensor,
    T: TiltSensor,
    O: OutputDriver,
{
    // External dependencies and configuration
    light: LightReader<L>,
    tilt: TiltSampler<T>,
    output: O,
    events: Option<EventPublisher<'a, EVENTS>>,
    config: ControllerConfig,

    // Loop state, owned exclusively by the tick
    smoother: ColorSmoother,
    overriding: bool,
    tilt_state: Option<TiltState>,

    // Internal dependencies
    renderer: Renderer<N>,
}

impl<'a, L, T, O, const N: usize, const EVENTS: usize> Controller<'a, L, T, O, N, EVENTS>
where
    L: LightSensor,
    T: TiltSensor,
    O: OutputDriver,
{
    /// Create a new controller
    ///
    /// Display and target colors start black.
    pub const fn new(light: L, tilt: T, output: O, config: ControllerConfig) -> Self {
        Self {
            light: LightReader::new(light, config.light_raw_max),
            tilt: TiltSampler::new(tilt, config.tilt_scale, config.tilt_sample_period),
            output,
            events: None,
            config,
            smoother: ColorSmoother::new(Rgb { r: 0, g: 0, b: 0 }),
            overriding: false,
            tilt_state: None,
            renderer: Renderer::new(),
        }
    }

    /// Also publish every event into a channel
    ///
    /// The loop never waits on the channel, the oldest queued event is
    /// evicted when it is full.
    #[must_use]
    pub fn with_events(mut self, events: EventPublisher<'a, EVENTS>) -> Self {
        self.events = Some(events);
        self
    }

    /// Run one tick of the loop
    ///
    /// Any collaborator failure aborts the tick and is returned as is.
    pub fn tick(&mut self, now: Instant) -> Result<TickReport, TickError<L, T, O>> {
        let mut events = Vec::new();
        let light = self.light.read().map_err(ControlError::Light)?;

        if is_override(light, &self.config) {
            return self.tick_override(light, events);
        }

        if self.overriding {
            self.overriding = false;
            self.emit(&mut events, LoopEvent::OverrideReleased);
        }

        let reading = self.tilt.sample(now).map_err(ControlError::Tilt)?;
        let target = decide_target(light, reading, self.smoother.target(), &self.config);
        self.smoother.set_target(target);

        // Readings matching no state leave the tilt state untouched
        if let Some(reading) = reading
            && let Some(state) = TiltState::classify(reading, &self.config)
            && self.tilt_state != Some(state)
        {
            self.tilt_state = Some(state);
            self.emit(
                &mut events,
                LoopEvent::TiltStateChanged {
                    state,
                    angle_x: reading.angle_x,
                },
            );
        }

        let display = self.smoother.tick();
        let frame = self.renderer.render(display, light);
        self.output.write(frame).map_err(ControlError::Output)?;

        Ok(TickReport {
            kind: TickKind::NormalRendered,
            delay: self.config.normal_tick_delay,
            light,
            rendered: self.renderer.color(),
            events,
        })
    }

    /// Forced green path: no tilt sampling, no smoothing, no brightness scaling
    fn tick_override(
        &mut self,
        light: LightLevel,
        mut events: Vec<LoopEvent, MAX_TICK_EVENTS>,
    ) -> Result<TickReport, TickError<L, T, O>> {
        if !self.overriding {
            self.overriding = true;
            self.emit(&mut events, LoopEvent::OverrideActivated);
        }

        self.smoother.force(GREEN);
        let frame = self.renderer.fill(GREEN);
        self.output.write(frame).map_err(ControlError::Output)?;

        Ok(TickReport {
            kind: TickKind::Override,
            delay: self.config.override_tick_delay,
            light,
            rendered: GREEN,
            events,
        })
    }

    /// Tick forever, sleeping between ticks
    ///
    /// Only returns when a tick fails.
    pub fn run<C, S>(
        &mut self,
        clock: &mut C,
        mut sleep: S,
    ) -> Result<Infallible, TickError<L, T, O>>
    where
        C: Clock,
        S: FnMut(Duration),
    {
        loop {
            let report = self.tick(clock.now())?;
            sleep(report.delay);
        }
    }

    fn emit(&self, events: &mut Vec<LoopEvent, MAX_TICK_EVENTS>, event: LoopEvent) {
        #[cfg(feature = "esp32-log")]
        match event {
            LoopEvent::OverrideActivated => println!("[Controller.tick] override activated"),
            LoopEvent::OverrideReleased => println!("[Controller.tick] override released"),
            LoopEvent::TiltStateChanged { state, angle_x } => println!(
                "[Controller.tick] tilt state {} (x = {:?})",
                state.as_str(),
                angle_x
            ),
        }
        let _ = events.push(event);
        if let Some(publisher) = &self.events {
            publisher.publish(event);
        }
    }

    /// Currently displayed color, before brightness scaling
    pub const fn display_color(&self) -> Rgb {
        self.smoother.current()
    }

    /// Color the display is converging to
    pub const fn target_color(&self) -> Rgb {
        self.smoother.target()
    }

    /// Whether the last tick took the override path
    pub const fn is_overriding(&self) -> bool {
        self.overriding
    }

    /// State of the most recent tilt sample
    pub const fn tilt_state(&self) -> Option<TiltState> {
        self.tilt_state
    }

    /// The last frame written to the strip
    pub fn frame(&self) -> &[Rgb] {
        self.renderer.frame()
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Restore loop state, e.g. to resume from a known color
    pub fn set_display_color(&mut self, display: Rgb, target: Rgb) {
        self.smoother.force(display);
        self.smoother.set_target(target);
    }

    pub fn light_sensor_mut(&mut self) -> &mut L {
        self.light.sensor_mut()
    }

    pub fn tilt_sensor_mut(&mut self) -> &mut T {
        self.tilt.sensor_mut()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
