//! Valet: a parking-structure allocation simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Valet sub-crates. For most users, adding `valet` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use valet::prelude::*;
//!
//! // Four floors of 64 slots, a 5-entry action log.
//! let mut garage = Garage::new(GarageConfig::default()).unwrap();
//!
//! // A car arrives and is parked in the first free slot in ring order.
//! let car = garage.add_entry();
//! assert_eq!(car, CarId(1));
//! match garage.apply(Command::ProcessEntry) {
//!     CommandOutcome::Entry(EntryOutcome::Parked { floor, slot, .. }) => {
//!         assert_eq!(floor, FloorNumber(1));
//!         assert_eq!(slot, SlotIndex(0));
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//!
//! // Rendering reads an owned snapshot; commands never block on it.
//! let snapshot = garage.snapshot();
//! assert_eq!(snapshot.occupied_total(), 1);
//! assert_eq!(snapshot.stack_depth, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `valet-core` | IDs, slot masks, commands, outcomes, reject reasons |
//! | [`engine`] | `valet-engine` | The garage, floor ring, queues, stack, log, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`valet-core`).
///
/// Contains the typed IDs, the [`types::SlotMask`] occupancy mask,
/// operator commands with their tagged outcomes, and reject reasons.
pub use valet_core as types;

/// The allocation engine (`valet-engine`).
///
/// [`engine::Garage`] owns all simulation state; construct it from an
/// [`engine::GarageConfig`] and drive it with commands.
pub use valet_engine as engine;

/// Common imports for typical Valet usage.
///
/// ```rust
/// use valet::prelude::*;
/// ```
///
/// This imports the most frequently used types: the garage and its
/// config, commands and outcomes, IDs, and the snapshot types.
pub mod prelude {
    // IDs and masks
    pub use valet_core::{CarId, FloorNumber, SlotIndex, SlotMask, EXIT_PLACEHOLDER_ID};

    // Commands and outcomes
    pub use valet_core::{
        Command, CommandOutcome, EntryOutcome, EvacuationReport, ExitOutcome, ExitRequestOutcome,
        RejectReason,
    };

    // Engine
    pub use valet_engine::{
        ConfigError, Garage, GarageConfig, GarageMetrics, GarageSnapshot,
    };
}
