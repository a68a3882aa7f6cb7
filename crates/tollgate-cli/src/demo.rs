//! Seeded walkthrough of the pass lifecycle.
//!
//! Drives the orchestrator through the canonical scenario: buy a pass,
//! sit on it, use it later and watch the validity window anchor to the
//! first use rather than the purchase, then run into exhaustion and
//! expiry and buy again.

use anyhow::Context;
use chrono::Duration;

use tollgate_core::{BoothId, ManualClock, PassClass, Timestamp, TollId, VehicleClass, VehicleReg};
use tollgate_system::{
    MemoryStore, PassageResult, SequentialIds, Toll, TollBooth, TollStore, TollSystem, Vehicle,
};

type DemoSystem = TollSystem<MemoryStore, ManualClock, SequentialIds>;

/// Build the sample registry: two plazas, five booths, three vehicles.
pub fn seed_system(start: Timestamp) -> DemoSystem {
    let mut store = MemoryStore::new();

    store.add_vehicle(Vehicle {
        reg: VehicleReg("MH-12-AB-1234".into()),
        vehicle_class: VehicleClass::TwoWheeler,
    });
    store.add_vehicle(Vehicle {
        reg: VehicleReg("MH-14-CD-5678".into()),
        vehicle_class: VehicleClass::FourWheeler,
    });
    store.add_vehicle(Vehicle {
        reg: VehicleReg("DL-01-EF-9012".into()),
        vehicle_class: VehicleClass::FourWheeler,
    });

    store.add_toll(Toll::new(
        TollId("T1".into()),
        "Mumbai-Pune Expressway Toll",
        "Lonavala, Maharashtra",
        [
            TollBooth::new(BoothId("B1".into()), TollId("T1".into()), "Booth A"),
            TollBooth::new(BoothId("B2".into()), TollId("T1".into()), "Booth B"),
            TollBooth::new(BoothId("B3".into()), TollId("T1".into()), "Booth C"),
        ],
    ));
    store.add_toll(Toll::new(
        TollId("T2".into()),
        "Delhi-Jaipur Highway Toll",
        "Manesar, Haryana",
        [
            TollBooth::new(BoothId("B1".into()), TollId("T2".into()), "Booth A"),
            TollBooth::new(BoothId("B2".into()), TollId("T2".into()), "Booth B"),
        ],
    ));

    let ids = SequentialIds::seeded(store.pass_count(), store.audit_count());
    TollSystem::new(store, ManualClock::starting_at(start), ids)
}

fn print_result(result: &PassageResult) {
    println!("  allowed: {}", result.allowed);
    println!("  message: {}", result.message);
    if let Some(snapshot) = &result.pass {
        println!(
            "  pass: {} ({}) status={} uses_remaining={} valid_until={}",
            snapshot.pass_id,
            snapshot.pass_class,
            snapshot.status,
            snapshot.uses_remaining,
            snapshot
                .valid_until
                .map(|ts| ts.to_string())
                .unwrap_or_else(|| "not set".to_string()),
        );
    }
    if let Some(options) = &result.offered_options {
        println!("  available passes:");
        for option in options {
            println!(
                "    - {}: Rs.{} ({}, {} uses) — {}",
                option.pass_class, option.price, option.duration, option.max_uses,
                option.description,
            );
        }
    }
}

/// Run the full walkthrough.
pub fn run() -> anyhow::Result<()> {
    let start = Timestamp::parse("2026-01-15T08:00:00Z").context("parsing demo start instant")?;
    let mut system = seed_system(start);
    tracing::info!(%start, "demo registry seeded");

    let rider = VehicleReg("MH-12-AB-1234".into());
    let toll = TollId("T1".into());
    let booth = BoothId("B1".into());

    println!("== Passage with no pass: denied, options offered ==");
    let result = system.process_passage(&rider, &toll, &booth)?;
    print_result(&result);

    println!("\n== Purchase a RETURN pass at 08:00 ==");
    let pass = system.purchase_pass(&rider, &toll, &booth, PassClass::Return)?;
    println!("  bought {} for Rs.{}", pass.pass_id, pass.price);
    println!("  valid_until: not set (window starts on first use)");

    println!("\n== First use at 11:00 — three hours after purchase ==");
    system.clock().advance(Duration::hours(3));
    let result = system.process_passage(&rider, &toll, &booth)?;
    print_result(&result);
    println!("  note: the 24h window runs from 11:00, not 08:00");

    println!("\n== Second use at 10:30 next day — inside the window ==");
    system.clock().advance(Duration::hours(23) + Duration::minutes(30));
    let result = system.process_passage(&rider, &toll, &booth)?;
    print_result(&result);

    println!("\n== Third attempt: exhausted ==");
    let result = system.process_passage(&rider, &toll, &booth)?;
    print_result(&result);

    println!("\n== Repurchase now succeeds ==");
    let pass = system.purchase_pass(&rider, &toll, &booth, PassClass::SevenDay)?;
    println!("  bought {} for Rs.{}", pass.pass_id, pass.price);

    println!("\n== Booth statistics ==");
    for booth_id in ["B1", "B2", "B3"] {
        if let Some(stats) = system.store().booth(&toll, &BoothId(booth_id.into())) {
            println!(
                "  {} {}: vehicles={} revenue=Rs.{}",
                toll, booth_id, stats.vehicles_processed, stats.revenue_collected,
            );
        }
    }

    println!("\n== Audit log ==");
    for record in system.store().audit_log() {
        println!(
            "  {} {} vehicle={} pass={} amount=Rs.{} at {}",
            record.audit_id,
            record.kind,
            record.vehicle_reg,
            record
                .pass_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            record.amount,
            record.timestamp,
        );
    }

    Ok(())
}
