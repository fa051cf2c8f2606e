//! The `IntersectionController` and its per-car passage.

use tracing::{debug, debug_span};

use tc_core::{Car, SimClock, TimingConfig};
use tc_sync::{FlowArbiter, FlowState, GateTicket, HeadOfLineGate, QuadrantLockSet};

use crate::{CarEvent, CarReport, EventRecord, EventSink};

/// Owns every piece of shared coordination state for one intersection.
///
/// `IntersectionController<S>` composes the head-of-line gate, the flow
/// arbiter, and the quadrant locks, and narrates each milestone to the sink
/// `S`.  Share it by reference across car threads; nothing in it is global,
/// so tests build as many isolated controllers as they like.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct IntersectionController<S: EventSink> {
    pub(crate) timing: TimingConfig,
    pub(crate) clock:  SimClock,
    pub(crate) gate:   HeadOfLineGate,
    pub(crate) flow:   FlowArbiter,
    pub(crate) quads:  QuadrantLockSet,
    pub(crate) sink:   S,
}

impl<S: EventSink> IntersectionController<S> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// The run clock.  Started when the controller was built.
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwrap the sink (e.g. to read collected events after a run).
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Copy of the flow arbiter's current state.
    pub fn flow_state(&self) -> FlowState {
        self.flow.snapshot()
    }

    pub fn quadrants(&self) -> &QuadrantLockSet {
        &self.quads
    }

    // ── Passage ───────────────────────────────────────────────────────────

    /// Drive `car` from `Arriving` to `Exited`, blocking the calling thread
    /// for the whole passage.
    ///
    /// The car is treated as having just reached the stop line; waiting for
    /// its scheduled arrival is the caller's concern.  Its place in its
    /// direction's line is taken now, so concurrent callers from one
    /// direction queue in call order.  Every resource taken here is released
    /// before returning.
    pub fn run_car(&self, car: &Car) -> CarReport {
        self.run_reserved(car, self.reserve(car))
    }

    /// Reserve `car`'s place in its direction's line ahead of its arrival.
    ///
    /// Reserve in arrival order, then hand each ticket to
    /// [`run_reserved`][Self::run_reserved]: cars from one direction then
    /// queue in that order even when they reach the stop line together.
    pub fn reserve(&self, car: &Car) -> GateTicket<'_> {
        self.gate.reserve(car.origin)
    }

    /// [`run_car`][Self::run_car] with a place reserved earlier by
    /// [`reserve`][Self::reserve].
    ///
    /// # Panics
    /// Panics if `ticket` was reserved for a different direction.
    pub fn run_reserved(&self, car: &Car, ticket: GateTicket<'_>) -> CarReport {
        assert_eq!(
            ticket.direction(),
            car.origin,
            "{car} given a ticket for direction {}",
            ticket.direction()
        );
        let _span = debug_span!("car", id = car.id.0, origin = %car.origin, target = %car.target)
            .entered();
        let turn = car.turn();
        let path = car.path();

        // Arriving: full stop at the stop line.
        let arrived_secs = self.emit(car, CarEvent::Arriving);
        self.clock.sleep(self.timing.stop_dwell_secs);

        // Queued: one car per direction past the stop line, in line order.
        let token = ticket.redeem();
        let queued_secs = self.emit(car, CarEvent::Queued);

        // Admitted: may park until the other direction's flow drains.
        let admission = self.flow.join(car.origin);
        let admitted_secs = self.emit(car, CarEvent::Admitted);
        debug!(?admission, waited = admitted_secs - queued_secs, "joined flow");

        // Crossing: hold the path for the turn's duration.
        let held = self.quads.acquire_path(&path);
        let crossing_start_secs = self.emit(car, CarEvent::Crossing);
        debug!(%path, %turn, "holding quadrants");
        self.clock.sleep(self.timing.crossing_secs(turn));
        let crossing_end_secs = self.emit(car, CarEvent::Cleared);
        self.quads.release_path(held);

        // Exited: release in reverse order of acquisition.
        let exiting_secs = self.emit(car, CarEvent::Exiting);
        let drained = self.flow.leave(car.origin);
        if drained {
            debug!(direction = %car.origin, "flow drained");
        }
        self.gate.release(token);
        let exited_secs = self.emit(car, CarEvent::Exited);

        CarReport {
            car: car.clone(),
            turn,
            path,
            admission,
            arrived_secs,
            queued_secs,
            admitted_secs,
            crossing_start_secs,
            crossing_end_secs,
            exiting_secs,
            exited_secs,
        }
    }

    /// Timestamp `event`, hand it to the sink, and return the timestamp.
    fn emit(&self, car: &Car, event: CarEvent) -> f64 {
        let time_secs = self.clock.elapsed_secs();
        debug!(%event, t = time_secs, "milestone");
        self.sink.record(&EventRecord::new(time_secs, car, event));
        time_secs
    }
}
