//! Valet quickstart: a complete, minimal garage session from scratch.
//!
//! Demonstrates:
//!   1. Building a GarageConfig and constructing the Garage
//!   2. Driving the command surface (arrivals, parking, exits)
//!   3. Reading owned snapshots for display
//!   4. Emergency evacuation
//!
//! Run with:
//!   cargo run --example quickstart

use valet_core::{Command, CommandOutcome, EntryOutcome};
use valet_engine::{Garage, GarageConfig, GarageSnapshot};

/// Render a snapshot the way a presentation layer would: entirely from
/// the owned copy, never reaching back into the garage.
fn print_snapshot(snapshot: &GarageSnapshot) {
    println!(
        "floor {} | free {}/{} | entry {} | exit {} | stack {}",
        snapshot.displayed_floor,
        snapshot.displayed_free,
        snapshot.floors[&snapshot.displayed_floor].capacity,
        snapshot.entry_count(),
        snapshot.exit_count(),
        snapshot.stack_depth,
    );
    for message in &snapshot.log {
        println!("  log: {message}");
    }
}

fn main() {
    // 1. Two floors of eight slots keeps the output readable.
    let config = GarageConfig {
        floor_count: 2,
        slots_per_floor: 8,
        ..GarageConfig::default()
    };
    let mut garage = Garage::new(config).expect("config is valid");

    // 2. Ten arrivals, processed until the head floor spills over.
    for _ in 0..10 {
        garage.apply(Command::AddEntry);
    }
    for _ in 0..10 {
        match garage.apply(Command::ProcessEntry) {
            CommandOutcome::Entry(EntryOutcome::Parked { car, floor, slot }) => {
                println!("parked car #{car} at floor {floor}, slot {slot}");
            }
            CommandOutcome::Entry(other) => {
                println!("entry not processed: {other:?}");
                break;
            }
            _ => unreachable!("ProcessEntry returns an entry outcome"),
        }
    }

    // 3. Rotate the view to the second floor and snapshot it.
    garage.apply(Command::RotateView);
    print_snapshot(&garage.snapshot());

    // 4. One car leaves and pays.
    garage.apply(Command::RequestExit);
    garage.apply(Command::ProcessExit);
    print_snapshot(&garage.snapshot());

    // 5. Clear the building.
    if let CommandOutcome::Evacuated(report) = garage.apply(Command::EmergencyEvacuate) {
        println!(
            "evacuated {} cars, zeroed {} slots",
            report.evacuated.len(),
            report.slots_cleared
        );
    }
    print_snapshot(&garage.snapshot());
}
