//! Fluent builder for constructing an [`IntersectionController`].

use tc_core::{SimClock, TimingConfig};
use tc_sync::{FlowArbiter, HeadOfLineGate, QuadrantLockSet};

use crate::{ControlResult, EventSink, IntersectionController, NoopSink};

/// Fluent builder for [`IntersectionController<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default      |
/// |---------------|--------------|
/// | `.sink(s)`    | `NoopSink`   |
///
/// # Example
///
/// ```rust,ignore
/// let controller = ControllerBuilder::new(TimingConfig::default())
///     .sink(ConsoleSink::stdout())
///     .build()?;
/// ```
pub struct ControllerBuilder<S: EventSink = NoopSink> {
    timing: TimingConfig,
    sink:   S,
}

impl ControllerBuilder<NoopSink> {
    pub fn new(timing: TimingConfig) -> Self {
        Self { timing, sink: NoopSink }
    }
}

impl<S: EventSink> ControllerBuilder<S> {
    /// Replace the event sink.
    pub fn sink<T: EventSink>(self, sink: T) -> ControllerBuilder<T> {
        ControllerBuilder { timing: self.timing, sink }
    }

    /// Validate the timing, allocate the coordination state, and start the
    /// run clock.
    ///
    /// Build immediately before running: car arrival offsets are measured
    /// from this moment.
    pub fn build(self) -> ControlResult<IntersectionController<S>> {
        self.timing.validate()?;
        Ok(IntersectionController {
            clock:  SimClock::start(self.timing.time_scale),
            timing: self.timing,
            gate:   HeadOfLineGate::new(),
            flow:   FlowArbiter::new(),
            quads:  QuadrantLockSet::new(),
            sink:   self.sink,
        })
    }
}
