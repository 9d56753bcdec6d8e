//! Integration test: the full operator flow on a reference garage.
//!
//! Walks a 4-floor, 64-slot garage through arrival, parking, exit,
//! payment, and evacuation, checking the externally observable state
//! (outcomes, snapshots, counters) at each step.

use valet_core::{
    CarId, Command, CommandOutcome, EntryOutcome, ExitOutcome, ExitRequestOutcome, FloorNumber,
    SlotIndex, EXIT_PLACEHOLDER_ID,
};
use valet_engine::{Garage, GarageConfig};

fn reference_garage() -> Garage {
    Garage::new(GarageConfig::default()).expect("default config is valid")
}

#[test]
fn end_to_end_reference_scenario() {
    let mut garage = reference_garage();

    // Two arrivals, then two parks: both land on the ring head floor
    // at the two lowest free indices.
    assert_eq!(garage.add_entry(), CarId(1));
    assert_eq!(garage.add_entry(), CarId(2));
    assert_eq!(
        garage.process_entry(),
        EntryOutcome::Parked {
            car: CarId(1),
            floor: FloorNumber(1),
            slot: SlotIndex(0),
        }
    );
    assert_eq!(
        garage.process_entry(),
        EntryOutcome::Parked {
            car: CarId(2),
            floor: FloorNumber(1),
            slot: SlotIndex(1),
        }
    );

    // Exit request clears the lower of the two occupied indices and
    // enqueues exactly one placeholder record.
    assert_eq!(
        garage.request_exit(),
        ExitRequestOutcome::Cleared {
            floor: FloorNumber(1),
            slot: SlotIndex(0),
        }
    );
    let snapshot = garage.snapshot();
    assert_eq!(snapshot.exit_queue, vec![EXIT_PLACEHOLDER_ID]);
    assert_eq!(snapshot.occupied_total(), 1);

    // Payment empties the exit queue.
    assert_eq!(
        garage.process_exit(),
        ExitOutcome::Completed {
            car: EXIT_PLACEHOLDER_ID,
        }
    );
    assert!(garage.exit_queue().is_empty());

    // Evacuation drains the remaining parked id (plus the stale one
    // the exit path left behind) and zeroes all floors.
    let report = garage.emergency_evacuate();
    assert_eq!(report.evacuated, vec![CarId(2), CarId(1)]);
    assert_eq!(report.slots_cleared, 1);

    let snapshot = garage.snapshot();
    assert_eq!(snapshot.stack_depth, 0);
    assert_eq!(snapshot.free_total, snapshot.capacity_total);
    for stats in snapshot.floors.values() {
        assert_eq!(stats.occupied, 0);
    }
}

#[test]
fn garage_fills_floor_by_floor_and_rejects_when_full() {
    let mut garage = Garage::new(GarageConfig {
        floor_count: 2,
        slots_per_floor: 4,
        ..GarageConfig::default()
    })
    .expect("config is valid");

    for _ in 0..8 {
        garage.add_entry();
    }

    let mut positions = Vec::new();
    for _ in 0..8 {
        match garage.process_entry() {
            EntryOutcome::Parked { floor, slot, .. } => positions.push((floor.0, slot.0)),
            other => panic!("expected Parked, got {other:?}"),
        }
    }
    assert_eq!(
        positions,
        vec![
            (1, 0),
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 0),
            (2, 1),
            (2, 2),
            (2, 3),
        ]
    );

    // A ninth car waits; the full ring rejects it without losing it.
    let waiting = garage.add_entry();
    assert_eq!(garage.process_entry(), EntryOutcome::Full);
    assert_eq!(garage.entry_queue().peek().map(|r| r.id), Some(waiting));

    // One departure, and the waiting car takes the freed slot.
    assert_eq!(
        garage.request_exit(),
        ExitRequestOutcome::Cleared {
            floor: FloorNumber(1),
            slot: SlotIndex(0),
        }
    );
    assert_eq!(
        garage.process_entry(),
        EntryOutcome::Parked {
            car: waiting,
            floor: FloorNumber(1),
            slot: SlotIndex(0),
        }
    );
}

#[test]
fn command_dispatch_matches_direct_calls() {
    let mut direct = reference_garage();
    let mut dispatched = reference_garage();

    direct.add_entry();
    direct.process_entry();
    direct.rotate_view();
    direct.request_exit();
    direct.process_exit();

    for command in [
        Command::AddEntry,
        Command::ProcessEntry,
        Command::RotateView,
        Command::RequestExit,
        Command::ProcessExit,
    ] {
        dispatched.apply(command);
    }

    let a = direct.snapshot();
    let b = dispatched.snapshot();
    assert_eq!(a.displayed_floor, b.displayed_floor);
    assert_eq!(a.entry_queue, b.entry_queue);
    assert_eq!(a.exit_queue, b.exit_queue);
    assert_eq!(a.stack_depth, b.stack_depth);
    assert_eq!(a.free_total, b.free_total);
    assert_eq!(a.log, b.log);
}

#[test]
fn rejected_commands_keep_the_engine_running() {
    let mut garage = reference_garage();

    // Every degenerate condition in sequence; none of them wedge the
    // engine or mutate state beyond a log entry.
    assert_eq!(garage.process_entry(), EntryOutcome::QueueEmpty);
    assert_eq!(garage.request_exit(), ExitRequestOutcome::NoneOccupied);
    assert_eq!(garage.process_exit(), ExitOutcome::QueueEmpty);

    let snapshot = garage.snapshot();
    assert_eq!(snapshot.occupied_total(), 0);
    assert_eq!(snapshot.stack_depth, 0);
    assert!(snapshot.entry_queue.is_empty());
    assert!(snapshot.exit_queue.is_empty());

    // The engine still works afterwards.
    garage.add_entry();
    assert!(matches!(
        garage.apply(Command::ProcessEntry),
        CommandOutcome::Entry(EntryOutcome::Parked { .. })
    ));
}
