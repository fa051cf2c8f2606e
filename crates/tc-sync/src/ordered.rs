//! Sort-then-acquire multi-lock over an indexed set of exclusive resources.
//!
//! # Deadlock freedom
//!
//! Every caller acquires the resources it needs in one global total order
//! (ascending id).  A cycle in the wait-for graph would need some holder of a
//! higher id to wait for a lower one, which the ordering forbids, so
//! circular wait cannot arise however the requested sets overlap.
//!
//! Nothing here knows about quadrants; [`crate::QuadrantLockSet`] is a thin
//! four-resource wrapper.

use parking_lot::{Mutex, MutexGuard};

/// The global acquisition order for a request: ascending, duplicates removed.
pub fn lock_order(ids: &[usize]) -> Vec<usize> {
    let mut order = ids.to_vec();
    order.sort_unstable();
    order.dedup();
    order
}

/// `N` independent binary locks acquired in ascending id order.
pub struct OrderedLockSet {
    locks: Box<[Mutex<()>]>,
}

impl OrderedLockSet {
    pub fn new(count: usize) -> Self {
        Self {
            locks: (0..count).map(|_| Mutex::new(())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    /// Block until every lock in `ids` is held, acquiring in [`lock_order`].
    ///
    /// # Panics
    /// Panics if any id is `>= self.len()`.
    pub fn acquire(&self, ids: &[usize]) -> OrderedGuard<'_> {
        let order = lock_order(ids);
        if let Some(&bad) = order.iter().find(|&&id| id >= self.locks.len()) {
            panic!("lock id {bad} out of range for a set of {}", self.locks.len());
        }
        let held = order
            .into_iter()
            .map(|id| (id, self.locks[id].lock()))
            .collect();
        OrderedGuard { held }
    }

    /// `true` if lock `id` is currently held by anyone.
    pub fn is_locked(&self, id: usize) -> bool {
        self.locks[id].is_locked()
    }
}

/// Proof of holding a set of locks.  Dropping it releases them in the
/// reverse of acquisition order.
pub struct OrderedGuard<'a> {
    held: Vec<(usize, MutexGuard<'a, ()>)>,
}

impl OrderedGuard<'_> {
    /// Held ids in acquisition order.
    pub fn held(&self) -> impl Iterator<Item = usize> + '_ {
        self.held.iter().map(|(id, _)| *id)
    }

    /// Release every lock now.  Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Drop for OrderedGuard<'_> {
    fn drop(&mut self) {
        while let Some((_, guard)) = self.held.pop() {
            drop(guard);
        }
    }
}
