//! Cumulative operation counters for the garage.
//!
//! [`GarageMetrics`] counts what the garage has done since
//! construction. Counters only ever increase; the snapshot surface
//! copies them for display.

/// Cumulative counters, all starting at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GarageMetrics {
    /// Car ids issued via `add_entry`.
    pub cars_issued: u64,
    /// Cars successfully parked by `process_entry`.
    pub cars_parked: u64,
    /// `process_entry` attempts rejected because every floor was full.
    pub entries_rejected_full: u64,
    /// `process_entry` attempts that found the entry queue empty.
    pub entry_queue_empty_hits: u64,
    /// Slots cleared by `request_exit`.
    pub exits_requested: u64,
    /// `request_exit` attempts that found no occupied slot anywhere.
    pub exits_rejected_none_occupied: u64,
    /// Exit-queue records finalized by `process_exit`.
    pub payments_processed: u64,
    /// `process_exit` attempts that found the exit queue empty.
    pub exit_queue_empty_hits: u64,
    /// Emergency evacuations run.
    pub evacuations: u64,
    /// Ids drained from the evacuation stack across all evacuations.
    pub cars_evacuated: u64,
    /// Evacuation-stack pushes dropped at capacity. Nonzero means the
    /// occupancy masks and the stack have diverged.
    pub stack_overflow_drops: u64,
}
