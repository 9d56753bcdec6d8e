//! Benchmark profiles for the Valet parking simulation engine.
//!
//! Provides pre-built [`GarageConfig`] profiles shared by the benches:
//!
//! - [`reference_profile`]: the default 4x64 reference structure
//! - [`tower_profile`]: a deep structure for traversal-heavy benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use valet_engine::{Garage, GarageConfig};

/// The reference benchmark profile: 4 floors of 64 slots.
pub fn reference_profile() -> GarageConfig {
    GarageConfig::default()
}

/// A traversal-heavy profile: 64 floors of 32 slots, so first-fit and
/// first-occupied scans walk a long ring.
pub fn tower_profile() -> GarageConfig {
    GarageConfig {
        floor_count: 64,
        slots_per_floor: 32,
        ..GarageConfig::default()
    }
}

/// Build a garage with every slot occupied through the entry flow.
pub fn full_garage(config: GarageConfig) -> Garage {
    let capacity = config.total_capacity();
    let mut garage = Garage::new(config).expect("profile config is valid");
    for _ in 0..capacity {
        garage.add_entry();
        garage.process_entry();
    }
    garage
}
