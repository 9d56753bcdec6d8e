//! Strongly-typed identifiers for cars, floors, and slots.

use std::fmt;

/// Identifies a car issued by the garage.
///
/// Allocated from a monotonic per-garage counter starting at 1. Ids are
/// never reused within a process, even after the car exits or is
/// evacuated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub u64);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CarId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Sentinel identity recorded for every car leaving via the exit path.
///
/// The exit path does not track which car occupies a slot, so the exit
/// queue carries this fixed placeholder instead of the real occupant's
/// id. Real ids start at 1 and grow without bound, so a long-lived
/// garage can also issue `CarId(999)` to a real car; the two are not
/// reconciled. See the exit-flow notes on `Garage::request_exit` in
/// `valet-engine`.
pub const EXIT_PLACEHOLDER_ID: CarId = CarId(999);

/// One-based floor number. Floor 1 is the ring head.
///
/// Floor numbers are assigned at construction and never change; the
/// ring has no add-floor or remove-floor operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloorNumber(pub u32);

impl fmt::Display for FloorNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FloorNumber {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Zero-based slot position within a floor's occupancy mask.
///
/// Bit `n` of a [`SlotMask`](crate::mask::SlotMask) corresponds to
/// `SlotIndex(n)`. Display formatting is zero-based; presentation
/// layers that want one-based slot labels add 1 themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub u8);

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for SlotIndex {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_raw_values() {
        assert_eq!(CarId(7).to_string(), "7");
        assert_eq!(FloorNumber(3).to_string(), "3");
        assert_eq!(SlotIndex(0).to_string(), "0");
    }

    #[test]
    fn ids_order_by_value() {
        assert!(CarId(1) < CarId(2));
        assert!(FloorNumber(1) < FloorNumber(4));
        assert!(SlotIndex(0) < SlotIndex(63));
    }

    #[test]
    fn placeholder_is_999() {
        assert_eq!(EXIT_PLACEHOLDER_ID, CarId(999));
    }
}
