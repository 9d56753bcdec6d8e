//! Operator commands and their tagged outcomes.
//!
//! The garage is a single-operator simulation: one actor issues discrete
//! commands and observes the resulting state. Each command executes as
//! one atomic synchronous step; its result is a tagged outcome, never an
//! error (see [`crate::reason`]).

use crate::id::{CarId, FloorNumber, SlotIndex};
use crate::reason::RejectReason;

/// A discrete command issued by the operator.
///
/// Dispatched through `Garage::apply` in `valet-engine`, which maps
/// each variant to the corresponding operation and returns a
/// [`CommandOutcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Issue a fresh car id and append it to the entry queue.
    /// Always succeeds; arrival is never rejected.
    AddEntry,
    /// Park the entry-queue head in the first free slot in ring order.
    ProcessEntry,
    /// Advance the display cursor to its ring successor. Viewing only;
    /// has no effect on allocation or exit selection.
    RotateView,
    /// Clear the first occupied slot in ring order and enqueue a
    /// placeholder exit record.
    RequestExit,
    /// Dequeue the exit queue and acknowledge payment (stub).
    ProcessExit,
    /// Drain the evacuation stack, then zero every floor's occupancy.
    EmergencyEvacuate,
    /// Occupy every slot of the displayed floor (testing aid).
    FillDisplayedFloor,
}

/// Outcome of [`Command::ProcessEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The entry-queue head was parked at the returned position.
    Parked {
        /// The parked car's id.
        car: CarId,
        /// Floor the car was parked on.
        floor: FloorNumber,
        /// Slot the car was parked in.
        slot: SlotIndex,
    },
    /// No free slot on any floor after a full ring cycle. The head car
    /// remains queued at the front, not lost and not moved to the back.
    Full,
    /// The entry queue was empty; nothing to park.
    QueueEmpty,
}

impl EntryOutcome {
    /// The reject reason, if this outcome mutated nothing.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Parked { .. } => None,
            Self::Full => Some(RejectReason::GarageFull),
            Self::QueueEmpty => Some(RejectReason::EntryQueueEmpty),
        }
    }
}

/// Outcome of [`Command::RequestExit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitRequestOutcome {
    /// The first occupied slot in ring order was cleared and a
    /// placeholder record was enqueued on the exit queue.
    Cleared {
        /// Floor the departing car occupied.
        floor: FloorNumber,
        /// Slot that was cleared.
        slot: SlotIndex,
    },
    /// No occupied slot anywhere; nothing was cleared or enqueued.
    NoneOccupied,
}

impl ExitRequestOutcome {
    /// The reject reason, if this outcome mutated nothing.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Cleared { .. } => None,
            Self::NoneOccupied => Some(RejectReason::NoneOccupied),
        }
    }
}

/// Outcome of [`Command::ProcessExit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitOutcome {
    /// A record was dequeued from the exit queue and finalized.
    Completed {
        /// The dequeued identity. Always
        /// [`EXIT_PLACEHOLDER_ID`](crate::id::EXIT_PLACEHOLDER_ID)
        /// under the placeholder exit scheme, carried here so callers
        /// need not assume it.
        car: CarId,
    },
    /// The exit queue was empty; nothing to finalize.
    QueueEmpty,
}

impl ExitOutcome {
    /// The reject reason, if this outcome mutated nothing.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Completed { .. } => None,
            Self::QueueEmpty => Some(RejectReason::ExitQueueEmpty),
        }
    }
}

/// Result of [`Command::EmergencyEvacuate`]. Always succeeds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvacuationReport {
    /// Ids drained from the evacuation stack, in pop order (most
    /// recently parked first).
    pub evacuated: Vec<CarId>,
    /// Occupied slots zeroed by the unconditional mask reset. May
    /// disagree with `evacuated.len()` when exits bypassed the stack.
    pub slots_cleared: u64,
}

/// Unified result of `Garage::apply`, one variant per command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// [`Command::AddEntry`]: the id issued to the new car.
    EntryAdded(CarId),
    /// [`Command::ProcessEntry`] outcome.
    Entry(EntryOutcome),
    /// [`Command::RotateView`]: the floor now displayed.
    ViewRotated(FloorNumber),
    /// [`Command::RequestExit`] outcome.
    ExitRequest(ExitRequestOutcome),
    /// [`Command::ProcessExit`] outcome.
    Exit(ExitOutcome),
    /// [`Command::EmergencyEvacuate`] report.
    Evacuated(EvacuationReport),
    /// [`Command::FillDisplayedFloor`]: the floor that was filled.
    FloorFilled(FloorNumber),
}

impl CommandOutcome {
    /// The reject reason, if the command completed without mutating
    /// state. `None` for commands that cannot be rejected.
    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Self::Entry(outcome) => outcome.reject_reason(),
            Self::ExitRequest(outcome) => outcome.reject_reason(),
            Self::Exit(outcome) => outcome.reject_reason(),
            Self::EntryAdded(_)
            | Self::ViewRotated(_)
            | Self::Evacuated(_)
            | Self::FloorFilled(_) => None,
        }
    }
}
