//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per car.  Rows may appear in any order; the resulting
//! [`Schedule`] is sorted by arrival.
//!
//! ```csv
//! car_id,arrival_secs,origin,target
//! 1,1.1,N,N
//! 2,2.2,^,^
//! 3,3.3,north,west
//! ```
//!
//! **`origin` / `target`** accept `N E S W`, compass names in any case, or
//! the arrow glyphs `^ > v <`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tc_core::{Car, CarId, Direction};

use crate::{Schedule, ScheduleError, ScheduleResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScheduleRecord {
    car_id:       u32,
    arrival_secs: f64,
    origin:       String,
    target:       String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Schedule`] from a CSV file.
pub fn load_schedule_csv(path: &Path) -> ScheduleResult<Schedule> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_schedule_reader(file)
}

/// Like [`load_schedule_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a schedule in
/// a binary.
pub fn load_schedule_reader<R: Read>(reader: R) -> ScheduleResult<Schedule> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let cars = csv_reader
        .deserialize::<ScheduleRecord>()
        .map(|result| {
            let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
            Ok(Car::new(
                CarId(row.car_id),
                parse_direction(&row.origin, row.car_id)?,
                parse_direction(&row.target, row.car_id)?,
                row.arrival_secs,
            ))
        })
        .collect::<ScheduleResult<Vec<Car>>>()?;

    Schedule::new(cars)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_direction(s: &str, car_id: u32) -> ScheduleResult<Direction> {
    s.parse::<Direction>()
        .map_err(|e| ScheduleError::Parse(format!("car {car_id}: {e}")))
}
