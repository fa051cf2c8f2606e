//! `tc-core` — foundational types for the four-way stop controller.
//!
//! This crate is a dependency of every other `tc-*` crate.  It has no `tc-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `CarId`                                                   |
//! | [`direction`]   | `Direction` (clockwise N, E, S, W)                        |
//! | [`geometry`]    | `Quadrant`, `Turn`, `QuadrantPath`, `quadrant_path`       |
//! | [`car`]         | `Car` — one immutable scheduled vehicle                   |
//! | [`time`]        | `TimingConfig`, `SimClock`                                |
//! | [`error`]       | `TcError`, `TcResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types.       |

pub mod car;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::Car;
pub use direction::Direction;
pub use error::{TcError, TcResult};
pub use geometry::{Quadrant, QuadrantPath, Turn, quadrant_path};
pub use ids::CarId;
pub use time::{SimClock, TimingConfig};
