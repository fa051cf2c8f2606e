//! In-memory collection, mainly for tests and post-run inspection.

use parking_lot::Mutex;

use tc_control::{CarEvent, EventRecord, EventSink};
use tc_core::CarId;

/// Collects every record in arrival order at the sink.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<EventRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// The events of one car, in the order they were recorded.
    pub fn events_for(&self, car: CarId) -> Vec<CarEvent> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.car == car)
            .map(|r| r.event)
            .collect()
    }

    /// Car ids in the order they recorded `event`.
    pub fn order_of(&self, event: CarEvent) -> Vec<CarId> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.event == event)
            .map(|r| r.car)
            .collect()
    }

    pub fn into_records(self) -> Vec<EventRecord> {
        self.records.into_inner()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &EventRecord) {
        self.records.lock().push(*event);
    }
}
