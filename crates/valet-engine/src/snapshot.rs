//! Owned, read-only snapshots of garage state for the presentation
//! layer.
//!
//! [`GarageSnapshot`] copies everything a renderer needs in one call:
//! the displayed floor, both queues, the evacuation-stack preview, the
//! action log, and per-floor statistics. The copy is detached from the
//! garage; rendering never holds a borrow across commands.

use indexmap::IndexMap;
use smallvec::SmallVec;

use valet_core::{CarId, FloorNumber, SlotMask};

/// Occupancy statistics for one floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloorStats {
    /// Free slots on the floor.
    pub free: u32,
    /// Occupied slots on the floor.
    pub occupied: u32,
    /// Usable slots on the floor.
    pub capacity: u32,
}

/// A point-in-time, read-only view of the garage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GarageSnapshot {
    /// Number of the floor under the display cursor.
    pub displayed_floor: FloorNumber,
    /// Occupancy mask of the displayed floor, for grid rendering.
    pub displayed_mask: SlotMask,
    /// Free slots on the displayed floor.
    pub displayed_free: u32,
    /// Entry-queue ids, head first.
    pub entry_queue: Vec<CarId>,
    /// Exit-queue ids, head first.
    pub exit_queue: Vec<CarId>,
    /// Top of the evacuation stack, newest first, truncated to the
    /// configured display depth.
    pub stack_top: SmallVec<[CarId; 8]>,
    /// Total ids on the evacuation stack.
    pub stack_depth: usize,
    /// Action-log messages, newest first.
    pub log: Vec<String>,
    /// Per-floor statistics in ring order.
    pub floors: IndexMap<FloorNumber, FloorStats>,
    /// Free slots across all floors.
    pub free_total: u64,
    /// Slot capacity across all floors.
    pub capacity_total: u64,
}

impl GarageSnapshot {
    /// Cars currently waiting in the entry queue.
    pub fn entry_count(&self) -> usize {
        self.entry_queue.len()
    }

    /// Records currently waiting in the exit queue.
    pub fn exit_count(&self) -> usize {
        self.exit_queue.len()
    }

    /// Occupied slots across all floors.
    pub fn occupied_total(&self) -> u64 {
        self.capacity_total - self.free_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valet_core::SlotIndex;

    fn sample_snapshot() -> GarageSnapshot {
        let mut mask = SlotMask::empty(8);
        mask.set(SlotIndex(0));
        let mut floors = IndexMap::new();
        floors.insert(
            FloorNumber(1),
            FloorStats {
                free: 7,
                occupied: 1,
                capacity: 8,
            },
        );
        floors.insert(
            FloorNumber(2),
            FloorStats {
                free: 8,
                occupied: 0,
                capacity: 8,
            },
        );
        GarageSnapshot {
            displayed_floor: FloorNumber(1),
            displayed_mask: mask,
            displayed_free: 7,
            entry_queue: vec![CarId(2), CarId(3)],
            exit_queue: vec![],
            stack_top: SmallVec::from_slice(&[CarId(1)]),
            stack_depth: 1,
            log: vec!["car #1 parked: floor 1, slot 0".to_string()],
            floors,
            free_total: 15,
            capacity_total: 16,
        }
    }

    #[test]
    fn counts_derive_from_queue_contents() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.entry_count(), 2);
        assert_eq!(snapshot.exit_count(), 0);
        assert_eq!(snapshot.occupied_total(), 1);
    }

    #[test]
    fn floor_stats_iterate_in_ring_order() {
        let snapshot = sample_snapshot();
        let numbers: Vec<u32> = snapshot.floors.keys().map(|n| n.0).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
