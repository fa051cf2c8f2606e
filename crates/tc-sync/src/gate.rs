//! Per-direction head-of-line gate.
//!
//! Each direction has one admission token.  A car takes its direction's
//! token after the stop-line dwell and keeps it until it has left the
//! intersection, so at most one car per direction is ever past the stop line.
//!
//! Tokens are granted in ticket order (a ticket lock per direction).  A
//! ticket can be reserved long before it is redeemed: a driver that knows
//! the arrival order reserves every car's place up front, and the token then
//! follows that order however the car threads are scheduled.
//! [`HeadOfLineGate::acquire`] reserves and redeems in one step, which gives
//! first-come first-served order among the callers.
//!
//! A ticket dropped without being redeemed is skipped, so a car that never
//! reaches the stop line does not block the cars behind it.

use parking_lot::{Condvar, Mutex};
use tracing::trace;

use tc_core::Direction;

#[derive(Clone, Default)]
struct Lane {
    /// Ticket handed to the next reservation.
    next_ticket: u64,
    /// Ticket currently allowed to hold the token.
    now_serving: u64,
    /// Reserved tickets dropped before their turn.
    abandoned:   Vec<u64>,
}

impl Lane {
    /// Move `now_serving` past the current ticket and any abandoned ones.
    fn advance(&mut self) {
        self.now_serving += 1;
        while let Some(pos) = self.abandoned.iter().position(|&t| t == self.now_serving) {
            self.abandoned.swap_remove(pos);
            self.now_serving += 1;
        }
    }
}

/// One binary token per [`Direction`], granted in ticket order.
pub struct HeadOfLineGate {
    lanes: Mutex<[Lane; Direction::COUNT]>,
    turn:  [Condvar; Direction::COUNT],
}

impl Default for HeadOfLineGate {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadOfLineGate {
    pub fn new() -> Self {
        Self {
            lanes: Mutex::new(Default::default()),
            turn:  Default::default(),
        }
    }

    /// Take the next place in `direction`'s line without waiting.
    pub fn reserve(&self, direction: Direction) -> GateTicket<'_> {
        let mut lanes = self.lanes.lock();
        let lane = &mut lanes[direction.index()];
        let number = lane.next_ticket;
        lane.next_ticket += 1;
        GateTicket { gate: self, direction, number, redeemed: false }
    }

    /// Block until the token for `direction` is free, then take it.
    pub fn acquire(&self, direction: Direction) -> GateToken<'_> {
        self.reserve(direction).redeem()
    }

    /// Hand the token to the next waiting car from the same direction.
    pub fn release(&self, token: GateToken<'_>) {
        drop(token);
    }

    /// Cars from `direction` holding the token or holding a ticket for it.
    pub fn queue_len(&self, direction: Direction) -> u64 {
        let lanes = self.lanes.lock();
        let lane = &lanes[direction.index()];
        lane.next_ticket - lane.now_serving - lane.abandoned.len() as u64
    }

    fn wait_for(&self, direction: Direction, number: u64) {
        let i = direction.index();
        let mut lanes = self.lanes.lock();
        while lanes[i].now_serving != number {
            trace!(%direction, ticket = number, serving = lanes[i].now_serving, "waiting for head of line");
            self.turn[i].wait(&mut lanes);
        }
    }

    fn hand_over(&self, direction: Direction) {
        let i = direction.index();
        self.lanes.lock()[i].advance();
        // Every waiter re-checks its ticket; only the next one proceeds.
        self.turn[i].notify_all();
    }

    fn abandon(&self, direction: Direction, number: u64) {
        let i = direction.index();
        let mut lanes = self.lanes.lock();
        if lanes[i].now_serving == number {
            lanes[i].advance();
            drop(lanes);
            self.turn[i].notify_all();
        } else {
            lanes[i].abandoned.push(number);
        }
    }
}

/// A reserved place in one direction's line.
///
/// Redeem it for the token with [`redeem`][Self::redeem].  Dropping it
/// unredeemed gives the place up.
pub struct GateTicket<'a> {
    gate:      &'a HeadOfLineGate,
    direction: Direction,
    number:    u64,
    redeemed:  bool,
}

impl<'a> GateTicket<'a> {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Position in the direction's line, counting from zero.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Block until every earlier ticket of this direction has been served,
    /// then take the token.
    pub fn redeem(mut self) -> GateToken<'a> {
        self.gate.wait_for(self.direction, self.number);
        self.redeemed = true;
        GateToken { gate: self.gate, direction: self.direction }
    }
}

impl Drop for GateTicket<'_> {
    fn drop(&mut self) {
        if !self.redeemed {
            self.gate.abandon(self.direction, self.number);
        }
    }
}

/// A held head-of-line token.  Dropping it releases the token.
pub struct GateToken<'a> {
    gate:      &'a HeadOfLineGate,
    direction: Direction,
}

impl GateToken<'_> {
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Drop for GateToken<'_> {
    fn drop(&mut self) {
        self.gate.hand_over(self.direction);
    }
}
