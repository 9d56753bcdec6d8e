//! FIFO car queues for the entry and exit lanes.
//!
//! [`CarQueue`] buffers cars between arrival and parking (entry lane)
//! and between slot clearance and payment (exit lane). Records move
//! head-to-tail in strict FIFO order; a dequeue on an empty queue
//! returns `None` and mutates nothing.

use std::collections::VecDeque;
use std::time::SystemTime;

use valet_core::CarId;

/// A car waiting in a queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarRecord {
    /// The car's issued id, or the exit placeholder on the exit lane.
    pub id: CarId,
    /// Wall-clock time at which the record was enqueued. Carried for
    /// the snapshot surface; the engine never reads it back.
    pub entry_time: SystemTime,
}

/// FIFO queue of car records.
///
/// Used twice by the garage: once for the entry lane, once for the
/// exit lane. The count always equals the number of records present,
/// including after failed dequeue attempts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarQueue {
    queue: VecDeque<CarRecord>,
}

impl CarQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append a record for `id` at the tail, stamped with the current
    /// wall-clock time.
    pub fn enqueue(&mut self, id: CarId) {
        self.queue.push_back(CarRecord {
            id,
            entry_time: SystemTime::now(),
        });
    }

    /// Remove and return the head record.
    ///
    /// Returns `None` on an empty queue, leaving the queue unchanged.
    pub fn dequeue(&mut self) -> Option<CarRecord> {
        self.queue.pop_front()
    }

    /// The head record, without removing it.
    pub fn peek(&self) -> Option<&CarRecord> {
        self.queue.front()
    }

    /// Number of records currently queued.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Ids in queue order, head first. For the snapshot surface.
    pub fn ids(&self) -> impl Iterator<Item = CarId> + '_ {
        self.queue.iter().map(|record| record.id)
    }

    /// Records in queue order, head first.
    pub fn records(&self) -> impl Iterator<Item = &CarRecord> {
        self.queue.iter()
    }
}
