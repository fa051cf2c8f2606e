//! `tc-sync` — the synchronization primitives behind intersection admission.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`gate`]      | `HeadOfLineGate`, `GateTicket`, `GateToken` — one token per direction |
//! | [`flow`]      | `FlowArbiter`, `FlowState`, `Admission`                       |
//! | [`ordered`]   | `OrderedLockSet`, `OrderedGuard`, `lock_order`                |
//! | [`quadrant`]  | `QuadrantLockSet`, `PathGuard`                                |
//!
//! # Admission protocol (summary)
//!
//! ```text
//! gate.acquire(d)          one car per direction past the stop line
//! flow.join(d)             same-direction batching, cross-direction exclusion
//! quads.acquire_path(p)    sorted multi-lock, no circular wait
//! ... crossing ...
//! quads.release_path(g)    reverse order
//! flow.leave(d)            last car out broadcasts to every parked direction
//! gate.release(token)      next car from d may queue
//! ```
//!
//! Every primitive is an explicit value; callers share them through an `Arc`
//! or a borrow, so each test can build an isolated set.

pub mod flow;
pub mod gate;
pub mod ordered;
pub mod quadrant;


pub use flow::{Admission, FlowArbiter, FlowState};
pub use gate::{GateTicket, GateToken, HeadOfLineGate};
pub use ordered::{OrderedGuard, OrderedLockSet, lock_order};
pub use quadrant::{PathGuard, QuadrantLockSet};
