//! The four quadrant locks.

use tc_core::{Quadrant, QuadrantPath};

use crate::{OrderedGuard, OrderedLockSet};

/// Fine-grained collision layer: one lock per [`Quadrant`].
///
/// Paths that share no quadrant (for example opposite right turns) hold
/// their locks at the same time; overlapping paths serialize.
pub struct QuadrantLockSet {
    locks: OrderedLockSet,
}

impl Default for QuadrantLockSet {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadrantLockSet {
    pub fn new() -> Self {
        Self {
            locks: OrderedLockSet::new(Quadrant::COUNT),
        }
    }

    /// Block until every quadrant of `path` is held.
    ///
    /// Locks are taken in ascending quadrant id, not traversal order.
    pub fn acquire_path(&self, path: &QuadrantPath) -> PathGuard<'_> {
        PathGuard {
            guard: self.locks.acquire(&path.indices()),
        }
    }

    /// Release a path in reverse acquisition order.
    pub fn release_path(&self, guard: PathGuard<'_>) {
        drop(guard);
    }

    pub fn is_occupied(&self, quadrant: Quadrant) -> bool {
        self.locks.is_locked(quadrant.index())
    }
}

/// Held quadrants of one crossing.  Dropping it frees them.
pub struct PathGuard<'a> {
    guard: OrderedGuard<'a>,
}

impl PathGuard<'_> {
    /// Held quadrants in acquisition (ascending id) order.
    pub fn held(&self) -> Vec<Quadrant> {
        self.guard.held().map(Quadrant::from_index).collect()
    }
}
