//! `tc-schedule` — the finite, ordered feed of cars.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`schedule`]   | `Schedule` — cars sorted by arrival, sequence-indexed      |
//! | [`loader`]     | `load_schedule_csv`, `load_schedule_reader`                |
//! | [`generator`]  | `generate_schedule` — seeded random routes and gaps        |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! The controller never hardcodes a population: every run is driven by a
//! `Schedule`, whichever source produced it.

pub mod error;
pub mod generator;
pub mod loader;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use generator::generate_schedule;
pub use loader::{load_schedule_csv, load_schedule_reader};
pub use schedule::Schedule;
