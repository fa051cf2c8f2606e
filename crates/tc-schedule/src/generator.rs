//! Deterministic random schedules.
//!
//! The same `(count, seed, mean_gap_secs)` always produces the same
//! schedule.  Gaps between consecutive arrivals are uniform on
//! `[0, 2 * mean_gap_secs]`, so several cars may reach the stop line almost
//! together; origin and target headings are uniform over the four
//! directions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tc_core::{Car, Direction, TcError};

use crate::{Schedule, ScheduleResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Generate `count` cars with ids `1..=count`.
///
/// Arrival times are rounded to a tenth of a second to keep narration
/// readable.  Fails if `mean_gap_secs` is negative or not finite, or if
/// `count` does not fit a [`CarId`][tc_core::CarId].
pub fn generate_schedule(count: usize, seed: u64, mean_gap_secs: f64) -> ScheduleResult<Schedule> {
    if !mean_gap_secs.is_finite() || mean_gap_secs < 0.0 {
        return Err(TcError::Config(format!(
            "mean_gap_secs must be finite and non-negative (got {mean_gap_secs})"
        ))
        .into());
    }

    let last_id = u32::try_from(count)
        .ok()
        .filter(|&n| n < u32::MAX)
        .ok_or_else(|| TcError::Config(format!("cannot generate {count} cars: ids must stay below {}", u32::MAX)))?;

    let mut rng = SmallRng::seed_from_u64(seed ^ (count as u64).wrapping_mul(MIXING_CONSTANT));
    let mut clock = 0.0_f64;
    let cars = (1..=last_id)
        .map(|id| {
            clock += rng.gen_range(0.0..=2.0 * mean_gap_secs);
            let origin = Direction::from_index(rng.gen_range(0..Direction::COUNT));
            let target = Direction::from_index(rng.gen_range(0..Direction::COUNT));
            Car::new(id, origin, target, (clock * 10.0).round() / 10.0)
        })
        .collect();

    Schedule::new(cars)
}
