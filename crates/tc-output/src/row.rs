//! Flat row type shared by the tabular backends.

use tc_control::EventRecord;

/// One car event, flattened for CSV and SQLite.
///
/// Directions are stored as their single-letter codes (`N`, `E`, `S`, `W`)
/// and events as their lowercase names.
#[derive(Clone, Debug, PartialEq)]
pub struct EventRow {
    pub time_secs: f64,
    pub car_id:    u32,
    pub origin:    &'static str,
    pub target:    &'static str,
    pub event:     &'static str,
}

impl From<&EventRecord> for EventRow {
    fn from(record: &EventRecord) -> Self {
        Self {
            time_secs: record.time_secs,
            car_id:    record.car.0,
            origin:    record.origin.as_str(),
            target:    record.target.as_str(),
            event:     record.event.as_str(),
        }
    }
}
