//! Simulation time model.
//!
//! # Design
//!
//! All protocol durations are expressed in *simulated seconds* (`f64`).  The
//! mapping to wall-clock time is a single multiplier:
//!
//!   wall_secs = sim_secs * time_scale
//!
//! `time_scale = 1.0` reproduces the real-time narration; tests compress a
//! run by using a small scale.  The sleeps are placeholders for "occupy a
//! resource for this long" and carry no correctness weight.

use std::thread;
use std::time::{Duration, Instant};

use crate::{TcError, TcResult, Turn};

// ── TimingConfig ──────────────────────────────────────────────────────────────

/// Durations of every timed step of a passage.
///
/// Typically built with [`Default`] or loaded from a JSON file by the
/// application crate, then checked with [`validate`][Self::validate] before
/// any car starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Mandatory full stop at the stop line.  Default: 2 s.
    pub stop_dwell_secs: f64,
    /// Crossing time for a right turn.  Default: 3 s.
    pub right_turn_secs: f64,
    /// Crossing time for a straight drive-through.  Default: 4 s.
    pub straight_secs:   f64,
    /// Crossing time for a left turn.  Default: 5 s.
    pub left_turn_secs:  f64,
    /// Wall-clock seconds per simulated second.  Default: 1.0 (real time).
    pub time_scale:      f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            stop_dwell_secs: 2.0,
            right_turn_secs: 3.0,
            straight_secs:   4.0,
            left_turn_secs:  5.0,
            time_scale:      1.0,
        }
    }
}

impl TimingConfig {
    /// Default durations with a different wall-clock scale.
    pub fn scaled(time_scale: f64) -> Self {
        Self { time_scale, ..Self::default() }
    }

    /// Simulated seconds a car performing `turn` spends in the intersection.
    #[inline]
    pub fn crossing_secs(&self, turn: Turn) -> f64 {
        match turn {
            Turn::Right    => self.right_turn_secs,
            Turn::Straight => self.straight_secs,
            Turn::Left     => self.left_turn_secs,
        }
    }

    /// Reject configurations no run can start with.
    ///
    /// The scale must be finite and positive, every duration finite,
    /// non-negative, and short enough to wait for at that scale, and
    /// crossing times strictly ordered Right < Straight < Left.
    pub fn validate(&self) -> TcResult<()> {
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            return Err(TcError::Config(format!(
                "time_scale must be finite and positive (got {})",
                self.time_scale
            )));
        }
        let durations = [
            ("stop_dwell_secs", self.stop_dwell_secs),
            ("right_turn_secs", self.right_turn_secs),
            ("straight_secs",   self.straight_secs),
            ("left_turn_secs",  self.left_turn_secs),
        ];
        for (name, secs) in durations {
            if !secs.is_finite() || secs < 0.0 {
                return Err(TcError::Config(format!(
                    "{name} must be a finite, non-negative number of seconds (got {secs})"
                )));
            }
            if scaled_wall(secs, self.time_scale).is_err() {
                return Err(TcError::Config(format!(
                    "{name} = {secs} is too long to wait for at time_scale {}",
                    self.time_scale
                )));
            }
        }
        if !(self.right_turn_secs < self.straight_secs && self.straight_secs < self.left_turn_secs) {
            return Err(TcError::Config(format!(
                "crossing times must satisfy right < straight < left (got {} / {} / {})",
                self.right_turn_secs, self.straight_secs, self.left_turn_secs
            )));
        }
        Ok(())
    }
}

/// `sim_secs * time_scale` as a `Duration`, or a config error if it does not
/// fit one.
fn scaled_wall(sim_secs: f64, time_scale: f64) -> TcResult<Duration> {
    Duration::try_from_secs_f64(sim_secs * time_scale).map_err(|_| {
        TcError::Config(format!(
            "{sim_secs} simulated seconds at time_scale {time_scale} is not a waitable duration"
        ))
    })
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Run-relative clock shared by every car task.
///
/// Holds the wall-clock start of the run and the scale; cheap to copy.
#[derive(Copy, Clone, Debug)]
pub struct SimClock {
    start:      Instant,
    time_scale: f64,
}

impl SimClock {
    /// Start a clock now.
    pub fn start(time_scale: f64) -> Self {
        Self { start: Instant::now(), time_scale }
    }

    #[inline]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Simulated seconds since the clock started.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64() / self.time_scale
    }

    /// Wall-clock duration of `sim_secs` simulated seconds, saturating at
    /// [`Duration::MAX`].  Negative and NaN inputs give zero.
    #[inline]
    pub fn wall(&self, sim_secs: f64) -> Duration {
        let secs = sim_secs * self.time_scale;
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Like [`wall`][Self::wall], but fails instead of saturating when the
    /// scaled duration is not a finite, non-negative `Duration`.
    pub fn checked_wall(&self, sim_secs: f64) -> TcResult<Duration> {
        scaled_wall(sim_secs, self.time_scale)
    }

    /// Block the calling thread for `sim_secs` simulated seconds.
    pub fn sleep(&self, sim_secs: f64) {
        thread::sleep(self.wall(sim_secs));
    }

    /// Block until `at_secs` simulated seconds after start.  Returns at once
    /// if that moment has passed.
    pub fn sleep_until(&self, at_secs: f64) {
        let remaining = at_secs - self.elapsed_secs();
        if remaining > 0.0 {
            self.sleep(remaining);
        }
    }
}
