//! Core types for the Valet parking simulation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Valet workspace:
//! typed IDs, the slot occupancy mask, operator commands with their
//! tagged outcomes, and reject reasons.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod id;
pub mod mask;
pub mod reason;

pub use command::{
    Command, CommandOutcome, EntryOutcome, EvacuationReport, ExitOutcome, ExitRequestOutcome,
};
pub use id::{CarId, FloorNumber, SlotIndex, EXIT_PLACEHOLDER_ID};
pub use mask::{SlotMask, MAX_SLOTS_PER_FLOOR};
pub use reason::RejectReason;
