//! `tc-control` — the intersection protocol entry point.
//!
//! # Per-car passage
//!
//! ```text
//! Scheduled ─(arrival offset)→ Arriving
//!   ① stop-line dwell
//!   ② HeadOfLineGate::acquire(origin)       → Queued
//!   ③ FlowArbiter::join(origin)             → Admitted
//!   ④ QuadrantLockSet::acquire_path(path)   → Crossing (turn-dependent dwell)
//!   ⑤ release_path → leave → token release  → Exited
//! ```
//!
//! [`IntersectionController::run_car`] performs ①–⑤ for one car and may be
//! called concurrently from any number of threads.  [`run_schedule`] is the
//! thin driver that gives every car of a [`Schedule`][tc_schedule::Schedule]
//! its own named thread.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tc_control::{ControllerBuilder, run_schedule};
//! use tc_core::TimingConfig;
//! use tc_schedule::Schedule;
//!
//! let controller = ControllerBuilder::new(TimingConfig::scaled(0.1)).build()?;
//! let report = run_schedule(&controller, &Schedule::reference())?;
//! assert!(report.violations().is_empty());
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod report;
pub mod runner;


pub use builder::ControllerBuilder;
pub use controller::IntersectionController;
pub use error::{ControlError, ControlResult};
pub use observer::{CarEvent, EventRecord, EventSink, NoopSink};
pub use report::{CarReport, RunReport, Violation};
pub use runner::run_schedule;
