//! The garage: the single-threaded allocation engine.
//!
//! [`Garage`] wires the floor ring, entry/exit queues, evacuation
//! stack, and action log into one command-driven state machine. Every
//! operation is a single atomic synchronous step triggered by a
//! discrete command; no intermediate state survives between commands,
//! and no operation can fail fatally: degenerate conditions return
//! tagged outcomes and write a log entry.
//!
//! # Exit-path fidelity
//!
//! The exit path does not know which car occupies a slot. A
//! `request_exit` clears the first occupied bit in ring order and
//! enqueues the fixed placeholder id; the real occupant's id stays on
//! the evacuation stack and can later be "evacuated" even though the
//! car is gone. This divergence is deliberate and preserved; the
//! evacuation drain and the mask reset are never reconciled against
//! each other.

use valet_core::{
    CarId, Command, CommandOutcome, EntryOutcome, EvacuationReport, ExitOutcome,
    ExitRequestOutcome, FloorNumber, RejectReason, EXIT_PLACEHOLDER_ID,
};

use crate::config::{ConfigError, GarageConfig};
use crate::log::ActionLog;
use crate::metrics::GarageMetrics;
use crate::queue::CarQueue;
use crate::ring::FloorRing;
use crate::snapshot::{FloorStats, GarageSnapshot};
use crate::stack::EvacuationStack;

/// Single-operator parking garage engine.
///
/// Owns all simulation state and executes commands synchronously.
/// Construct once per process from a validated [`GarageConfig`] and
/// pass explicitly to every caller; there are no hidden statics.
#[derive(Clone, Debug, PartialEq)]
pub struct Garage {
    ring: FloorRing,
    entry: CarQueue,
    exit: CarQueue,
    stack: EvacuationStack,
    log: ActionLog,
    next_car_id: u64,
    stack_display_depth: usize,
    metrics: GarageMetrics,
}

impl Garage {
    /// Construct a garage from a configuration.
    ///
    /// Validates the configuration, builds the floor ring and empty
    /// queues, and sizes the evacuation stack at the total slot
    /// capacity. Consumes the config.
    pub fn new(config: GarageConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ring = FloorRing::new(config.floor_count, config.slots_per_floor);
        let mut log = ActionLog::new(config.log_capacity);
        log.record("system initialized");
        Ok(Self {
            ring,
            entry: CarQueue::new(),
            exit: CarQueue::new(),
            stack: EvacuationStack::new(config.total_capacity()),
            log,
            next_car_id: 1,
            stack_display_depth: config.stack_display_depth,
            metrics: GarageMetrics::default(),
        })
    }

    /// Issue a fresh car id and append it to the entry queue.
    ///
    /// Arrival is never rejected; the queue is unbounded.
    pub fn add_entry(&mut self) -> CarId {
        let id = CarId(self.next_car_id);
        self.next_car_id += 1;
        self.entry.enqueue(id);
        self.metrics.cars_issued += 1;
        self.log.record(format!("car #{id} joined the entry queue"));
        id
    }

    /// Park the entry-queue head in the first free slot in ring order.
    ///
    /// On a full ring the head car remains queued at the front; on an
    /// empty queue nothing changes. Each successful park pushes the
    /// car's id onto the evacuation stack.
    pub fn process_entry(&mut self) -> EntryOutcome {
        if self.entry.is_empty() {
            self.metrics.entry_queue_empty_hits += 1;
            self.reject(RejectReason::EntryQueueEmpty);
            return EntryOutcome::QueueEmpty;
        }

        let Some((floor, slot)) = self.ring.allocate_first_fit() else {
            self.metrics.entries_rejected_full += 1;
            self.reject(RejectReason::GarageFull);
            return EntryOutcome::Full;
        };

        let record = self.entry.dequeue().expect("entry queue checked non-empty");
        let car = record.id;
        if !self.stack.push(car) {
            // Capacity equals total slot count, so a dropped push means
            // occupancy and stack bookkeeping have already diverged.
            self.metrics.stack_overflow_drops += 1;
            self.log
                .record(format!("evacuation stack full, car #{car} not recorded"));
        }
        self.metrics.cars_parked += 1;
        self.log
            .record(format!("car #{car} parked: floor {floor}, slot {slot}"));
        EntryOutcome::Parked { car, floor, slot }
    }

    /// Advance the display cursor to its ring successor and return the
    /// floor now displayed. Viewing only; never logged and never
    /// touches allocation state.
    pub fn rotate_view(&mut self) -> FloorNumber {
        self.ring.rotate_display()
    }

    /// Clear the first occupied slot in ring order and enqueue a
    /// placeholder record on the exit queue.
    ///
    /// The occupant's real id is not looked up and the evacuation
    /// stack is not touched; see the module notes on exit-path
    /// fidelity.
    pub fn request_exit(&mut self) -> ExitRequestOutcome {
        let Some((floor, slot)) = self.ring.find_first_occupied() else {
            self.metrics.exits_rejected_none_occupied += 1;
            self.reject(RejectReason::NoneOccupied);
            return ExitRequestOutcome::NoneOccupied;
        };

        self.ring.clear_slot(floor, slot);
        self.exit.enqueue(EXIT_PLACEHOLDER_ID);
        self.metrics.exits_requested += 1;
        self.log
            .record(format!("car leaving floor {floor}, slot {slot}"));
        ExitRequestOutcome::Cleared { floor, slot }
    }

    /// Dequeue the exit queue and acknowledge payment.
    ///
    /// Payment is a stub acknowledgment; no financial computation is
    /// part of the engine.
    pub fn process_exit(&mut self) -> ExitOutcome {
        match self.exit.dequeue() {
            Some(record) => {
                self.metrics.payments_processed += 1;
                self.log.record("payment processed, car exited");
                ExitOutcome::Completed { car: record.id }
            }
            None => {
                self.metrics.exit_queue_empty_hits += 1;
                self.reject(RejectReason::ExitQueueEmpty);
                ExitOutcome::QueueEmpty
            }
        }
    }

    /// Drain the evacuation stack, then zero every floor's occupancy.
    ///
    /// Two phases, never reconciled: the stack drains whatever park
    /// events it recorded (logging each id), then the mask reset
    /// unconditionally clears every floor, including occupancy the
    /// stack never saw. Always succeeds.
    pub fn emergency_evacuate(&mut self) -> EvacuationReport {
        self.log.record("emergency evacuation started");

        let mut evacuated = Vec::with_capacity(self.stack.depth());
        while let Some(id) = self.stack.pop() {
            self.log.record(format!("evacuating car #{id}"));
            evacuated.push(id);
        }

        let slots_cleared = self.ring.reset_all();

        self.metrics.evacuations += 1;
        self.metrics.cars_evacuated += evacuated.len() as u64;
        self.log.record("evacuation complete, all slots empty");
        EvacuationReport {
            evacuated,
            slots_cleared,
        }
    }

    /// Occupy every slot of the displayed floor (testing aid).
    ///
    /// Bypasses the queues and the evacuation stack entirely, exactly
    /// like the exit path's clear in reverse.
    pub fn fill_displayed_floor(&mut self) -> FloorNumber {
        let number = self.ring.fill_displayed();
        self.log.record(format!("debug: floor {number} filled"));
        number
    }

    /// Execute one operator command and return its outcome.
    ///
    /// The single dispatcher-facing entry point: every variant maps to
    /// exactly one of the operations above.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::AddEntry => CommandOutcome::EntryAdded(self.add_entry()),
            Command::ProcessEntry => CommandOutcome::Entry(self.process_entry()),
            Command::RotateView => CommandOutcome::ViewRotated(self.rotate_view()),
            Command::RequestExit => CommandOutcome::ExitRequest(self.request_exit()),
            Command::ProcessExit => CommandOutcome::Exit(self.process_exit()),
            Command::EmergencyEvacuate => CommandOutcome::Evacuated(self.emergency_evacuate()),
            Command::FillDisplayedFloor => CommandOutcome::FloorFilled(self.fill_displayed_floor()),
        }
    }

    /// Build an owned, read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> GarageSnapshot {
        let displayed = self.ring.displayed();
        let floors = self
            .ring
            .floors()
            .map(|floor| {
                let mask = floor.slots();
                (
                    floor.number(),
                    FloorStats {
                        free: mask.free_count(),
                        occupied: mask.occupied_count(),
                        capacity: u32::from(mask.width()),
                    },
                )
            })
            .collect();
        GarageSnapshot {
            displayed_floor: displayed.number(),
            displayed_mask: displayed.slots(),
            displayed_free: displayed.slots().free_count(),
            entry_queue: self.entry.ids().collect(),
            exit_queue: self.exit.ids().collect(),
            stack_top: self.stack.top(self.stack_display_depth),
            stack_depth: self.stack.depth(),
            log: self.log.entries().map(str::to_string).collect(),
            floors,
            free_total: self.ring.free_total(),
            capacity_total: self.ring.total_capacity(),
        }
    }

    /// Log a reject reason verbatim.
    fn reject(&mut self, reason: RejectReason) {
        self.log.record(reason.to_string());
    }

    /// The floor ring.
    pub fn ring(&self) -> &FloorRing {
        &self.ring
    }

    /// The entry queue.
    pub fn entry_queue(&self) -> &CarQueue {
        &self.entry
    }

    /// The exit queue.
    pub fn exit_queue(&self) -> &CarQueue {
        &self.exit
    }

    /// The evacuation stack.
    pub fn stack(&self) -> &EvacuationStack {
        &self.stack
    }

    /// The action log.
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Cumulative operation counters.
    pub fn metrics(&self) -> &GarageMetrics {
        &self.metrics
    }
}
