//! The scheduled vehicle record.

use std::fmt;

use crate::{CarId, Direction, QuadrantPath, Turn, quadrant_path};

/// One car as supplied by the schedule.
///
/// Immutable once scheduled; the task that drives it through the
/// intersection borrows it for the whole passage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    pub id:           CarId,
    /// Heading when reaching the stop line.
    pub origin:       Direction,
    /// Heading after leaving the intersection.
    pub target:       Direction,
    /// Simulated seconds after run start at which the car reaches the stop line.
    pub arrival_secs: f64,
    /// Position in the global arrival order (0-based).  Assigned by the
    /// schedule; `0` until then.
    pub index:        usize,
}

impl Car {
    pub fn new(id: impl Into<CarId>, origin: Direction, target: Direction, arrival_secs: f64) -> Self {
        Self {
            id: id.into(),
            origin,
            target,
            arrival_secs,
            index: 0,
        }
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        Turn::between(self.origin, self.target)
    }

    /// Quadrants this car occupies while crossing.
    #[inline]
    pub fn path(&self) -> QuadrantPath {
        quadrant_path(self.origin, self.turn())
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.id, self.origin.glyph(), self.target.glyph())
    }
}
