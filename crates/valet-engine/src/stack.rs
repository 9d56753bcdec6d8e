//! Bounded LIFO record of park events.
//!
//! [`EvacuationStack`] receives one push per successful park, so its
//! LIFO order is the parking order: the most recently parked car
//! evacuates first. It is the only structure tracking which cars are
//! currently parked, independent of the occupancy masks, and the two
//! are deliberately never reconciled (see `Garage::request_exit`).
//!
//! Capacity equals the garage's total slot count, so a push can only be
//! dropped if bookkeeping has already diverged. The drop is silent at
//! the stack level but reported to the caller, which counts and logs it.

use smallvec::SmallVec;
use valet_core::CarId;

/// Bounded LIFO stack of parked car ids.
#[derive(Clone, Debug, PartialEq)]
pub struct EvacuationStack {
    items: Vec<CarId>,
    capacity: usize,
}

impl EvacuationStack {
    /// Create an empty stack bounded at `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push an id, returning whether it was stored.
    ///
    /// A push at capacity is dropped and returns `false`; the stack is
    /// otherwise unchanged. Capacity equals total slot count, so this
    /// bound should be unreachable under correct use.
    pub fn push(&mut self, id: CarId) -> bool {
        if self.items.len() >= self.capacity {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Remove and return the top id (most recently parked).
    pub fn pop(&mut self) -> Option<CarId> {
        self.items.pop()
    }

    /// Number of ids currently on the stack.
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no ids.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of ids the stack will store.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The top `n` ids, newest first. For the snapshot surface.
    pub fn top(&self, n: usize) -> SmallVec<[CarId; 8]> {
        self.items.iter().rev().take(n).copied().collect()
    }
}
