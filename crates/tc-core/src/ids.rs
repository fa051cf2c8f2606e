//! Strongly typed car identifier.
//!
//! `CarId` is the external identity a schedule assigns to a vehicle (the
//! number printed in narration), not an index into any collection.  Use
//! [`Car::index`][crate::Car::index] for the arrival sequence position.

use std::fmt;

/// Identity of one car, as assigned by the schedule.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CarId(pub u32);

impl CarId {
    /// Placeholder for a car that has not been assigned an id.
    pub const INVALID: CarId = CarId(u32::MAX);
}

impl Default for CarId {
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car {}", self.0)
    }
}

impl From<u32> for CarId {
    #[inline(always)]
    fn from(n: u32) -> CarId {
        CarId(n)
    }
}
