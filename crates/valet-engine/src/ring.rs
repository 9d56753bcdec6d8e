//! The circular floor ring: fixed floors, first-fit allocation, and
//! the display cursor.
//!
//! [`FloorRing`] stores the garage's floors in a fixed-length array and
//! derives ring traversal from modulo arithmetic, so wraparound is the
//! same O(1) step for the allocation scan and the display cursor.
//! Membership and order never change after construction.
//!
//! Two cursors exist. The allocation-search start point is always the
//! ring head (floor 1); the independent display cursor is used only for
//! viewing and has no effect on allocation or exit selection.

use valet_core::{FloorNumber, SlotIndex, SlotMask};

/// One parking floor: an immutable number plus its occupancy mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Floor {
    number: FloorNumber,
    slots: SlotMask,
}

impl Floor {
    /// The floor's one-based number.
    pub fn number(&self) -> FloorNumber {
        self.number
    }

    /// The floor's occupancy mask.
    pub fn slots(&self) -> SlotMask {
        self.slots
    }
}

/// Fixed circular ordering of floors.
///
/// Created once at garage construction; there is no add-floor or
/// remove-floor operation. Traversing the ring successor exactly
/// `len()` times from any floor returns to that floor.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorRing {
    floors: Vec<Floor>,
    display_cursor: usize,
}

impl FloorRing {
    /// Build a ring of `floor_count` empty floors, numbered from 1.
    ///
    /// # Panics
    ///
    /// Panics if `floor_count` is zero or `slots_per_floor` is not a
    /// valid mask width. Unreachable through a validated
    /// [`GarageConfig`](crate::GarageConfig).
    pub fn new(floor_count: u32, slots_per_floor: u8) -> Self {
        assert!(floor_count >= 1, "FloorRing needs at least 1 floor");
        let floors = (1..=floor_count)
            .map(|number| Floor {
                number: FloorNumber(number),
                slots: SlotMask::empty(slots_per_floor),
            })
            .collect();
        Self {
            floors,
            display_cursor: 0,
        }
    }

    /// Claim the first free slot in ring order.
    ///
    /// Starts at the ring head, visits floors in ring order, and takes
    /// the lowest clear bit of the first floor with space: a ring-wide
    /// first-fit policy, not per-floor greedy. Sets the bit and returns
    /// the position, or `None` when every floor is full after a full
    /// cycle.
    pub fn allocate_first_fit(&mut self) -> Option<(FloorNumber, SlotIndex)> {
        for floor in &mut self.floors {
            if let Some(slot) = floor.slots.first_clear() {
                floor.slots.set(slot);
                return Some((floor.number, slot));
            }
        }
        None
    }

    /// The lowest occupied slot on the first floor with any occupancy,
    /// in the same traversal order as allocation. Does not mutate.
    pub fn find_first_occupied(&self) -> Option<(FloorNumber, SlotIndex)> {
        for floor in &self.floors {
            if let Some(slot) = floor.slots.first_set() {
                return Some((floor.number, slot));
            }
        }
        None
    }

    /// Free one slot.
    ///
    /// No-op for a floor number outside the ring; clearing an
    /// already-free slot is also a no-op.
    pub fn clear_slot(&mut self, number: FloorNumber, slot: SlotIndex) {
        if let Some(floor) = self.floor_mut(number) {
            floor.slots.clear(slot);
        }
    }

    /// Advance the display cursor to its ring successor and return the
    /// floor now displayed.
    pub fn rotate_display(&mut self) -> FloorNumber {
        self.display_cursor = (self.display_cursor + 1) % self.floors.len();
        self.floors[self.display_cursor].number
    }

    /// The floor currently selected for display.
    pub fn displayed(&self) -> &Floor {
        &self.floors[self.display_cursor]
    }

    /// Occupy every slot of the displayed floor and return its number.
    pub fn fill_displayed(&mut self) -> FloorNumber {
        let floor = &mut self.floors[self.display_cursor];
        floor.slots.fill();
        floor.number
    }

    /// Clear every floor's occupancy mask and return how many occupied
    /// slots were zeroed. Used only by emergency evacuation.
    pub fn reset_all(&mut self) -> u64 {
        let mut cleared = 0u64;
        for floor in &mut self.floors {
            cleared += u64::from(floor.slots.occupied_count());
            floor.slots.reset();
        }
        cleared
    }

    /// Number of floors in the ring.
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    /// Whether the ring has no floors. Always false for a constructed
    /// ring; provided for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Total slot capacity across all floors.
    pub fn total_capacity(&self) -> u64 {
        self.floors
            .iter()
            .map(|floor| u64::from(floor.slots.width()))
            .sum()
    }

    /// Total free slots across all floors.
    pub fn free_total(&self) -> u64 {
        self.floors
            .iter()
            .map(|floor| u64::from(floor.slots.free_count()))
            .sum()
    }

    /// Total occupied slots across all floors.
    pub fn occupied_total(&self) -> u64 {
        self.floors
            .iter()
            .map(|floor| u64::from(floor.slots.occupied_count()))
            .sum()
    }

    /// Look up a floor by number.
    pub fn floor(&self, number: FloorNumber) -> Option<&Floor> {
        let index = usize::try_from(number.0.checked_sub(1)?).ok()?;
        self.floors.get(index)
    }

    fn floor_mut(&mut self, number: FloorNumber) -> Option<&mut Floor> {
        let index = usize::try_from(number.0.checked_sub(1)?).ok()?;
        self.floors.get_mut(index)
    }

    /// Floors in ring order, head first.
    pub fn floors(&self) -> impl Iterator<Item = &Floor> {
        self.floors.iter()
    }
}
