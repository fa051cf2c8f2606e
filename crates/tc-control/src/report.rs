//! Per-car timelines and whole-run property checks.
//!
//! Every timestamp is taken at a point that brackets the protected region
//! from the inside:
//!
//! | Field                  | Taken                                   |
//! |------------------------|-----------------------------------------|
//! | `admitted_secs`        | after `join` returned                   |
//! | `crossing_start_secs`  | after every quadrant is held            |
//! | `crossing_end_secs`    | before any quadrant is released         |
//! | `exiting_secs`         | before `leave`                          |
//!
//! so two cars whose protected regions never overlap also never have
//! overlapping recorded intervals, and the checks below are exact rather
//! than timing-sensitive.

use std::fmt;

use tc_core::{Car, CarId, Quadrant, QuadrantPath, Turn};
use tc_sync::Admission;

// ── CarReport ─────────────────────────────────────────────────────────────────

/// Timeline of one completed passage.  All times are simulated seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct CarReport {
    pub car:                 Car,
    pub turn:                Turn,
    pub path:                QuadrantPath,
    pub admission:           Admission,
    pub arrived_secs:        f64,
    pub queued_secs:         f64,
    pub admitted_secs:       f64,
    pub crossing_start_secs: f64,
    pub crossing_end_secs:   f64,
    pub exiting_secs:        f64,
    pub exited_secs:         f64,
}

impl CarReport {
    /// Quadrants held: `[crossing_start, crossing_end]`.
    #[inline]
    pub fn crossing_interval(&self) -> (f64, f64) {
        (self.crossing_start_secs, self.crossing_end_secs)
    }

    /// Flow membership: `[admitted, exiting]`.
    #[inline]
    pub fn flow_interval(&self) -> (f64, f64) {
        (self.admitted_secs, self.exiting_secs)
    }

    /// Time spent between the end of the stop and entering the flow.
    pub fn wait_secs(&self) -> f64 {
        self.admitted_secs - self.queued_secs
    }
}

/// Open-interval overlap: touching endpoints do not count.
fn overlaps((a_start, a_end): (f64, f64), (b_start, b_end): (f64, f64)) -> bool {
    a_start < b_end && b_start < a_end
}

// ── Violation ─────────────────────────────────────────────────────────────────

/// A broken protocol property found in a [`RunReport`].
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    /// Two cars held the same quadrant at once.
    QuadrantOverlap { first: CarId, second: CarId, quadrant: Quadrant },
    /// Cars from different directions were in their flows at once.
    CrossDirectionOverlap { first: CarId, second: CarId },
    /// A later same-direction car was queued before an earlier one.
    HeadOfLineOrder { earlier: CarId, later: CarId },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::QuadrantOverlap { first, second, quadrant } => {
                write!(f, "{first} and {second} held quadrant {quadrant} at the same time")
            }
            Violation::CrossDirectionOverlap { first, second } => {
                write!(f, "{first} and {second} flowed from different directions at the same time")
            }
            Violation::HeadOfLineOrder { earlier, later } => {
                write!(f, "{later} was queued before {earlier}, which arrived first from the same direction")
            }
        }
    }
}

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Outcome of a whole run: one report per car, in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    pub cars:         Vec<CarReport>,
    /// Simulated seconds from clock start until the last car exited.
    pub elapsed_secs: f64,
}

impl RunReport {
    pub fn get(&self, id: CarId) -> Option<&CarReport> {
        self.cars.iter().find(|r| r.car.id == id)
    }

    /// Latest `exited_secs` of any car, or `0.0` if there were none.
    pub fn makespan_secs(&self) -> f64 {
        self.cars.iter().map(|r| r.exited_secs).fold(0.0, f64::max)
    }

    /// Pairs with a shared quadrant whose crossing intervals overlap.
    pub fn check_mutual_exclusion(&self) -> Vec<Violation> {
        let mut found = Vec::new();
        for (i, a) in self.cars.iter().enumerate() {
            for b in &self.cars[i + 1..] {
                let Some(quadrant) = a.path.iter().find(|&q| b.path.contains(q)) else {
                    continue;
                };
                if overlaps(a.crossing_interval(), b.crossing_interval()) {
                    found.push(Violation::QuadrantOverlap { first: a.car.id, second: b.car.id, quadrant });
                }
            }
        }
        found
    }

    /// Different-origin pairs whose flow memberships overlap.
    pub fn check_flow_exclusion(&self) -> Vec<Violation> {
        let mut found = Vec::new();
        for (i, a) in self.cars.iter().enumerate() {
            for b in &self.cars[i + 1..] {
                if a.car.origin != b.car.origin && overlaps(a.flow_interval(), b.flow_interval()) {
                    found.push(Violation::CrossDirectionOverlap { first: a.car.id, second: b.car.id });
                }
            }
        }
        found
    }

    /// Same-origin pairs queued out of arrival order.
    pub fn check_head_of_line(&self) -> Vec<Violation> {
        let mut found = Vec::new();
        for (i, a) in self.cars.iter().enumerate() {
            for b in &self.cars[i + 1..] {
                if a.car.origin != b.car.origin {
                    continue;
                }
                let (earlier, later) = if a.car.index < b.car.index { (a, b) } else { (b, a) };
                if later.queued_secs < earlier.queued_secs {
                    found.push(Violation::HeadOfLineOrder { earlier: earlier.car.id, later: later.car.id });
                }
            }
        }
        found
    }

    /// Every violation of every check.
    pub fn violations(&self) -> Vec<Violation> {
        let mut all = self.check_mutual_exclusion();
        all.extend(self.check_flow_exclusion());
        all.extend(self.check_head_of_line());
        all
    }
}
