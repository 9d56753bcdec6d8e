//! Reject reasons for commands that complete without mutating state.
//!
//! No fatal errors originate from the engine: every degenerate condition
//! is reported as a tagged outcome carrying one of these reasons, and
//! the engine keeps accepting subsequent commands unconditionally.

use std::error::Error;
use std::fmt;

/// Why a command produced no state change.
///
/// Carried inside the outcome enums in [`crate::command`] and used by
/// the engine when writing action-log entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// `ProcessEntry` found the entry queue empty.
    EntryQueueEmpty,
    /// `ProcessExit` found the exit queue empty.
    ExitQueueEmpty,
    /// `ProcessEntry` found no free slot on any floor; the head car
    /// stays queued at the front.
    GarageFull,
    /// `RequestExit` found no occupied slot on any floor.
    NoneOccupied,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntryQueueEmpty => write!(f, "entry queue is empty"),
            Self::ExitQueueEmpty => write!(f, "exit queue is empty"),
            Self::GarageFull => write!(f, "no free slot on any floor"),
            Self::NoneOccupied => write!(f, "no occupied slot on any floor"),
        }
    }
}

impl Error for RejectReason {}
