//! Event sink contract for narrating car passages.

use std::fmt;
use std::sync::Arc;

use tc_core::{Car, CarId, Direction};

/// Milestones of one car's passage, in the order a car emits them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum CarEvent {
    /// Reached the stop line; the mandatory stop begins.
    Arriving,
    /// Took its direction's head-of-line token.
    Queued,
    /// Joined (or started) its direction's flow.
    Admitted,
    /// Holds every quadrant of its path.  Emitted while holding them.
    Crossing,
    /// Finished crossing.  Emitted while still holding the quadrants.
    Cleared,
    /// Released its quadrants.
    Exiting,
    /// Left the flow and returned the head-of-line token.
    Exited,
}

impl CarEvent {
    pub const ALL: [CarEvent; 7] = [
        CarEvent::Arriving,
        CarEvent::Queued,
        CarEvent::Admitted,
        CarEvent::Crossing,
        CarEvent::Cleared,
        CarEvent::Exiting,
        CarEvent::Exited,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CarEvent::Arriving => "arriving",
            CarEvent::Queued   => "queued",
            CarEvent::Admitted => "admitted",
            CarEvent::Crossing => "crossing",
            CarEvent::Cleared  => "cleared",
            CarEvent::Exiting  => "exiting",
            CarEvent::Exited   => "exited",
        }
    }

    /// The three milestones of the classic arrive/cross/exit narration.
    pub fn is_narrated(self) -> bool {
        matches!(self, CarEvent::Arriving | CarEvent::Crossing | CarEvent::Exiting)
    }
}

impl fmt::Display for CarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped milestone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EventRecord {
    /// Simulated seconds since the controller's clock started.
    pub time_secs: f64,
    pub car:       CarId,
    pub origin:    Direction,
    pub target:    Direction,
    pub event:     CarEvent,
}

impl EventRecord {
    pub fn new(time_secs: f64, car: &Car, event: CarEvent) -> Self {
        Self {
            time_secs,
            car: car.id,
            origin: car.origin,
            target: car.target,
            event,
        }
    }
}

/// Receiver of car milestones.
///
/// Called concurrently from every car thread, so implementors serialize
/// internally; a record must never interleave with another.  `record` has
/// no error path: sinks that can fail keep the error for later retrieval.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &EventRecord);

    /// Flush buffered output.  Called once by the driver after the last car.
    fn finish(&self) {}
}

/// An [`EventSink`] that discards everything.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &EventRecord) {}
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn record(&self, event: &EventRecord) {
        (**self).record(event);
    }

    fn finish(&self) {
        (**self).finish();
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&self, event: &EventRecord) {
        (**self).record(event);
    }

    fn finish(&self) {
        (**self).finish();
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn record(&self, event: &EventRecord) {
        (**self).record(event);
    }

    fn finish(&self) {
        (**self).finish();
    }
}

/// `None` discards; `Some(sink)` forwards.
impl<S: EventSink> EventSink for Option<S> {
    fn record(&self, event: &EventRecord) {
        if let Some(sink) = self {
            sink.record(event);
        }
    }

    fn finish(&self) {
        if let Some(sink) = self {
            sink.finish();
        }
    }
}

/// Fan-out to two sinks, first then second.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn record(&self, event: &EventRecord) {
        self.0.record(event);
        self.1.record(event);
    }

    fn finish(&self) {
        self.0.finish();
        self.1.finish();
    }
}
