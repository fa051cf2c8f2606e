//! Cross-direction mutual exclusion with same-direction batching.
//!
//! # Model
//!
//! The intersection is leased to one direction at a time.  Cars from the
//! lessee direction join the current flow without waiting; cars from any
//! other direction park on a shared condition until the flow drains.  This
//! is a readers-writers lock in which every direction is its own reader
//! class and only one class may be inside at once.
//!
//! The last car out clears the lease and wakes *every* parked car: several
//! directions may be waiting and only re-checking the state tells each one
//! whether it won.  `join` therefore re-checks in a loop after every wake.
//!
//! # Fairness
//!
//! `join` never blocks a car whose direction already owns the flow.  A
//! direction that keeps supplying cars before its flow drains keeps the
//! lease indefinitely and the other directions wait for it.  With a finite
//! schedule every flow eventually drains.

use parking_lot::{Condvar, Mutex};
use tracing::trace;

use tc_core::Direction;

// ── FlowState ─────────────────────────────────────────────────────────────────

/// Snapshot of the shared admission state.
///
/// Invariant: `current_direction()` is `None` iff every count is zero, and
/// at most one direction has a non-zero count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowState {
    current: Option<Direction>,
    counts:  [u32; Direction::COUNT],
}

impl FlowState {
    /// Direction currently owning the intersection, if any.
    #[inline]
    pub fn current_direction(&self) -> Option<Direction> {
        self.current
    }

    /// Cars from `direction` admitted and not yet left.
    #[inline]
    pub fn flow_count(&self, direction: Direction) -> u32 {
        self.counts[direction.index()]
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Check the ownership invariant.
    pub fn is_consistent(&self) -> bool {
        match self.current {
            None => self.counts.iter().all(|&c| c == 0),
            Some(owner) => Direction::ALL
                .iter()
                .all(|&d| (d == owner) == (self.counts[d.index()] > 0)),
        }
    }
}

/// How a car entered the flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// The intersection was free; the car started a new flow.
    Owner,
    /// The car's direction already owned the intersection.
    Joined,
}

// ── FlowArbiter ───────────────────────────────────────────────────────────────

struct Inner {
    flow:    FlowState,
    /// Cars parked in `join`, per direction.
    waiting: [u32; Direction::COUNT],
}

/// Single-lock, single-condition arbiter over [`FlowState`].
pub struct FlowArbiter {
    inner:   Mutex<Inner>,
    drained: Condvar,
}

impl Default for FlowArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowArbiter {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                flow:    FlowState::default(),
                waiting: [0; Direction::COUNT],
            }),
            drained: Condvar::new(),
        }
    }

    /// Enter the flow for `direction`, blocking while another direction
    /// owns the intersection.
    pub fn join(&self, direction: Direction) -> Admission {
        let i = direction.index();
        let mut inner = self.inner.lock();
        loop {
            let current = inner.flow.current;
            match current {
                None => {
                    inner.flow.current = Some(direction);
                    inner.flow.counts[i] = 1;
                    return Admission::Owner;
                }
                Some(owner) if owner == direction => {
                    inner.flow.counts[i] += 1;
                    return Admission::Joined;
                }
                Some(owner) => {
                    trace!(%direction, %owner, "parked behind another flow");
                    inner.waiting[i] += 1;
                    self.drained.wait(&mut inner);
                    inner.waiting[i] -= 1;
                }
            }
        }
    }

    /// Leave the flow for `direction`.  Returns `true` if this car was the
    /// last one out and the intersection is now free.
    ///
    /// # Panics
    /// Panics if `direction` does not own the intersection: the caller never
    /// joined, or already left.
    pub fn leave(&self, direction: Direction) -> bool {
        let i = direction.index();
        let mut inner = self.inner.lock();
        assert!(
            inner.flow.current == Some(direction) && inner.flow.counts[i] > 0,
            "leave({direction}) without a matching join (state: {:?})",
            inner.flow
        );
        inner.flow.counts[i] -= 1;
        if inner.flow.counts[i] > 0 {
            return false;
        }
        inner.flow.current = None;
        drop(inner);
        self.drained.notify_all();
        true
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> FlowState {
        self.inner.lock().flow
    }

    /// Cars from `direction` currently parked in [`join`][Self::join].
    pub fn waiting(&self, direction: Direction) -> u32 {
        self.inner.lock().waiting[direction.index()]
    }
}
