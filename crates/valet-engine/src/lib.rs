//! Allocation and state engine for the Valet parking simulation.
//!
//! Provides the top-level [`Garage`] that owns all simulation state
//! (floor ring, entry/exit queues, evacuation stack, action log) and
//! executes operator commands as single atomic synchronous steps.
//! There is exactly one caller at a time; no locking or transaction
//! discipline is required.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod garage;
pub mod log;
pub mod metrics;
pub mod queue;
pub mod ring;
pub mod snapshot;
pub mod stack;

pub use config::{ConfigError, GarageConfig};
pub use garage::Garage;
pub use log::ActionLog;
pub use metrics::GarageMetrics;
pub use queue::{CarQueue, CarRecord};
pub use ring::{Floor, FloorRing};
pub use snapshot::{FloorStats, GarageSnapshot};
pub use stack::EvacuationStack;
