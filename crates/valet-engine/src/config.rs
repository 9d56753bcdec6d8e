//! Garage configuration, validation, and error types.
//!
//! [`GarageConfig`] is the builder-input for constructing a
//! [`Garage`](crate::Garage). [`validate()`](GarageConfig::validate) checks all
//! structural invariants up front so the engine itself never has to
//! produce a fatal error.

use std::error::Error;
use std::fmt;

use valet_core::mask::MAX_SLOTS_PER_FLOOR;

/// Errors detected during [`GarageConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The garage has zero floors.
    NoFloors,
    /// `slots_per_floor` is zero or exceeds the mask width.
    SlotWidthOutOfRange {
        /// The configured value that was out of range.
        configured: u8,
    },
    /// The action log capacity is zero.
    LogCapacityZero,
    /// `floor_count * slots_per_floor` does not fit in the platform's
    /// `usize`, so the evacuation stack cannot be sized.
    CapacityOverflow {
        /// The configured floor count.
        floor_count: u32,
        /// The configured slots per floor.
        slots_per_floor: u8,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFloors => write!(f, "floor_count must be at least 1"),
            Self::SlotWidthOutOfRange { configured } => {
                write!(
                    f,
                    "slots_per_floor must be in 1..={MAX_SLOTS_PER_FLOOR}, got {configured}"
                )
            }
            Self::LogCapacityZero => write!(f, "log_capacity must be at least 1"),
            Self::CapacityOverflow {
                floor_count,
                slots_per_floor,
            } => {
                write!(
                    f,
                    "total capacity {floor_count} x {slots_per_floor} overflows usize"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Complete configuration for constructing a garage.
///
/// The defaults match the reference structure: 4 floors of 64 slots,
/// a 5-entry action log, and a 5-deep stack preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GarageConfig {
    /// Number of floors in the ring. Fixed after construction.
    pub floor_count: u32,
    /// Usable slots per floor, 1..=64 (one bit per slot).
    pub slots_per_floor: u8,
    /// Number of messages retained by the action log.
    pub log_capacity: usize,
    /// Number of stack entries surfaced in snapshots (newest first).
    pub stack_display_depth: usize,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            floor_count: 4,
            slots_per_floor: 64,
            log_capacity: 5,
            stack_display_depth: 5,
        }
    }
}

impl GarageConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one floor.
        if self.floor_count == 0 {
            return Err(ConfigError::NoFloors);
        }
        // 2. Slot width must fit one mask.
        if self.slots_per_floor == 0 || self.slots_per_floor > MAX_SLOTS_PER_FLOOR {
            return Err(ConfigError::SlotWidthOutOfRange {
                configured: self.slots_per_floor,
            });
        }
        // 3. Log must retain at least one message.
        if self.log_capacity == 0 {
            return Err(ConfigError::LogCapacityZero);
        }
        // 4. Total capacity sizes the evacuation stack; it must fit usize.
        if usize::try_from(self.floor_count)
            .ok()
            .and_then(|floors| floors.checked_mul(usize::from(self.slots_per_floor)))
            .is_none()
        {
            return Err(ConfigError::CapacityOverflow {
                floor_count: self.floor_count,
                slots_per_floor: self.slots_per_floor,
            });
        }
        Ok(())
    }

    /// Total slot capacity across all floors.
    ///
    /// # Panics
    ///
    /// Panics on overflow. Unreachable after
    /// [`validate()`](GarageConfig::validate) has passed.
    pub fn total_capacity(&self) -> usize {
        usize::try_from(self.floor_count)
            .ok()
            .and_then(|floors| floors.checked_mul(usize::from(self.slots_per_floor)))
            .expect("capacity validated")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GarageConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.floor_count, 4);
        assert_eq!(config.slots_per_floor, 64);
        assert_eq!(config.total_capacity(), 256);
    }

    #[test]
    fn zero_floors_fails() {
        let config = GarageConfig {
            floor_count: 0,
            ..GarageConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoFloors));
    }

    #[test]
    fn zero_slot_width_fails() {
        let config = GarageConfig {
            slots_per_floor: 0,
            ..GarageConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SlotWidthOutOfRange { configured: 0 })
        );
    }

    #[test]
    fn oversized_slot_width_fails() {
        let config = GarageConfig {
            slots_per_floor: 65,
            ..GarageConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SlotWidthOutOfRange { configured: 65 })
        );
    }

    #[test]
    fn zero_log_capacity_fails() {
        let config = GarageConfig {
            log_capacity: 0,
            ..GarageConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::LogCapacityZero));
    }

    #[test]
    fn errors_display_the_offending_values() {
        let err = ConfigError::SlotWidthOutOfRange { configured: 65 };
        let msg = err.to_string();
        assert!(msg.contains("1..=64"));
        assert!(msg.contains("65"));
    }
}
