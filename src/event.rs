//! Loop diagnostics
//!
//! Discrete events emitted on state transitions, and a bounded queue that
//! hands them to a consumer outside the control loop (console, dashboard).
//!
//! Publishing never blocks and never fails: when the queue is full the oldest
//! event is evicted, so the latest transition always reaches the consumer.
//! Evictions are counted and can be collected by the subscriber.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::decision::TiltState;

/// Default number of events buffered between the loop and its consumer
pub const EVENT_CHANNEL_SIZE: usize = 8;

/// Observable state transition of the control loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopEvent {
    /// Light level rose above the threshold, green is forced
    OverrideActivated,
    /// Light level dropped back to or below the threshold
    OverrideReleased,
    /// A tilt sample classified into a different state than the previous one
    TiltStateChanged {
        state: TiltState,
        /// Scaled X angle of the sample
        angle_x: f32,
    },
}

struct EventQueue<const SIZE: usize> {
    events: Deque<LoopEvent, SIZE>,
    /// Events evicted since the subscriber last collected the count
    dropped: u32,
}

/// Bounded drop-oldest queue of [`LoopEvent`]s, safe to share with interrupts
pub struct EventChannel<const SIZE: usize = EVENT_CHANNEL_SIZE> {
    inner: Mutex<RefCell<EventQueue<SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(EventQueue {
                events: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Handle for the control loop
    pub const fn publisher(&self) -> EventPublisher<'_, SIZE> {
        EventPublisher { channel: self }
    }

    /// Handle for the consumer
    pub const fn subscriber(&self) -> EventSubscriber<'_, SIZE> {
        EventSubscriber { channel: self }
    }

    /// Queue an event, evicting the oldest one if the queue is full
    ///
    /// Returns the evicted event, if any.
    pub fn publish(&self, event: LoopEvent) -> Option<LoopEvent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if SIZE == 0 {
                queue.dropped = queue.dropped.saturating_add(1);
                return Some(event);
            }
            let evicted = if queue.events.is_full() {
                queue.dropped = queue.dropped.saturating_add(1);
                queue.events.pop_front()
            } else {
                None
            };
            let _ = queue.events.push_back(event);
            evicted
        })
    }

    /// Oldest queued event
    pub fn pop(&self) -> Option<LoopEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().events.pop_front())
    }

    /// Number of evicted events since the last call, resetting the count
    pub fn take_dropped(&self) -> u32 {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            core::mem::take(&mut queue.dropped)
        })
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing half held by the control loop
#[derive(Clone, Copy)]
pub struct EventPublisher<'a, const SIZE: usize = EVENT_CHANNEL_SIZE> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventPublisher<'_, SIZE> {
    pub fn publish(&self, event: LoopEvent) -> Option<LoopEvent> {
        self.channel.publish(event)
    }
}

/// Consuming half, forwards events to a console or dashboard
#[derive(Clone, Copy)]
pub struct EventSubscriber<'a, const SIZE: usize = EVENT_CHANNEL_SIZE> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSubscriber<'_, SIZE> {
    pub fn pop(&self) -> Option<LoopEvent> {
        self.channel.pop()
    }

    pub fn take_dropped(&self) -> u32 {
        self.channel.take_dropped()
    }
}
