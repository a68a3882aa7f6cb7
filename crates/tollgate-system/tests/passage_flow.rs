//! End-to-end passage scenarios driven through the orchestrator with a
//! manual clock: the first-use anchoring rule, exhaustion and expiry
//! denials, the repurchase rules, and the audit/statistics side effects.

use chrono::Duration;

use tollgate_core::{
    BoothId, ManualClock, PassClass, PassStatus, Timestamp, TollId, VehicleClass, VehicleReg,
};
use tollgate_system::{
    AuditKind, MemoryStore, SequentialIds, SystemError, Toll, TollBooth, TollStore, TollSystem,
    Vehicle,
};

fn t(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn two_wheeler() -> VehicleReg {
    VehicleReg("MH-12-AB-1234".into())
}

fn four_wheeler() -> VehicleReg {
    VehicleReg("MH-14-CD-5678".into())
}

fn toll_id() -> TollId {
    TollId("T1".into())
}

fn booth(id: &str) -> BoothId {
    BoothId(id.into())
}

/// A system seeded like the production bootstrap: one plaza with two
/// booths, one vehicle of each class, clock pinned at T0.
fn seeded_system() -> TollSystem<MemoryStore, ManualClock, SequentialIds> {
    let mut store = MemoryStore::new();
    store.add_vehicle(Vehicle {
        reg: two_wheeler(),
        vehicle_class: VehicleClass::TwoWheeler,
    });
    store.add_vehicle(Vehicle {
        reg: four_wheeler(),
        vehicle_class: VehicleClass::FourWheeler,
    });
    store.add_toll(Toll::new(
        toll_id(),
        "Mumbai-Pune Expressway Toll",
        "Lonavala, Maharashtra",
        [
            TollBooth::new(booth("B1"), toll_id(), "Booth A"),
            TollBooth::new(booth("B2"), toll_id(), "Booth B"),
        ],
    ));
    let ids = SequentialIds::seeded(store.pass_count(), store.audit_count());
    TollSystem::new(store, ManualClock::starting_at(t("2026-01-15T08:00:00Z")), ids)
}

// ── SINGLE pass: one use, one hour from first use ────────────────────

#[test]
fn single_pass_full_lifecycle() {
    let mut system = seeded_system();

    // Purchase at T0. Four-wheeler SINGLE costs 100.
    let pass = system
        .purchase_pass(&four_wheeler(), &toll_id(), &booth("B1"), PassClass::Single)
        .unwrap();
    assert_eq!(pass.price, 100);
    assert_eq!(pass.uses_remaining, 1);
    assert_eq!(pass.valid_until, None);

    // First passage at T0+5min: allowed, window anchored to the use.
    system.clock().advance(Duration::minutes(5));
    let result = system
        .process_passage(&four_wheeler(), &toll_id(), &booth("B1"))
        .unwrap();
    assert!(result.allowed);
    let snapshot = result.pass.unwrap();
    assert_eq!(snapshot.uses_remaining, 0);
    assert_eq!(snapshot.status, PassStatus::Exhausted);
    assert_eq!(snapshot.valid_until, Some(t("2026-01-15T09:05:00Z")));

    // Second passage immediately after: denied, exhausted.
    let result = system
        .process_passage(&four_wheeler(), &toll_id(), &booth("B1"))
        .unwrap();
    assert!(!result.allowed);
    assert_eq!(result.message, "Pass PASS-0001 is exhausted");
    assert_eq!(result.pass.unwrap().status, PassStatus::Exhausted);
    assert!(result.offered_options.is_some());
}

// ── RETURN pass: two uses within 24 hours of first use ───────────────

#[test]
fn return_pass_second_use_near_window_end() {
    let mut system = seeded_system();
    system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B1"), PassClass::Return)
        .unwrap();

    // First use at T1 = 09:00 anchors the window to 09:00 + 24h.
    system.clock().set(t("2026-01-15T09:00:00Z"));
    let result = system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap();
    assert!(result.allowed);
    assert_eq!(result.pass.unwrap().uses_remaining, 1);

    // Second use at T1+23h: still inside the window.
    system.clock().set(t("2026-01-16T08:00:00Z"));
    let result = system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap();
    assert!(result.allowed);
    let snapshot = result.pass.unwrap();
    assert_eq!(snapshot.uses_remaining, 0);
    assert_eq!(snapshot.status, PassStatus::Exhausted);

    // Third attempt at T1+23h5min: exhaustion wins over expiry.
    system.clock().advance(Duration::minutes(5));
    let result = system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap();
    assert!(!result.allowed);
    assert_eq!(result.message, "Pass PASS-0001 is exhausted");
}

#[test]
fn return_pass_expires_with_a_use_remaining() {
    let mut system = seeded_system();
    system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B1"), PassClass::Return)
        .unwrap();

    // First use at T1.
    system.clock().set(t("2026-01-15T09:00:00Z"));
    assert!(system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap()
        .allowed);

    // Attempt at T1+25h: denied expired, the remaining use untouched.
    system.clock().set(t("2026-01-16T10:00:00Z"));
    let result = system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap();
    assert!(!result.allowed);
    assert_eq!(result.message, "Pass PASS-0001 is expired");
    let snapshot = result.pass.unwrap();
    assert_eq!(snapshot.status, PassStatus::Expired);
    assert_eq!(snapshot.uses_remaining, 1);

    // The status flip was persisted even though access was denied.
    let stored = system
        .store()
        .pass(&snapshot.pass_id)
        .unwrap();
    assert_eq!(stored.status, PassStatus::Expired);
    assert_eq!(stored.uses_remaining, 1);
}

#[test]
fn expiry_boundary_is_strict() {
    let mut system = seeded_system();
    system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B1"), PassClass::Return)
        .unwrap();

    system.clock().set(t("2026-01-15T09:00:00Z"));
    assert!(system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap()
        .allowed);

    // Exactly at valid_until: not valid.
    system.clock().set(t("2026-01-16T09:00:00Z"));
    let result = system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap();
    assert!(!result.allowed);
    assert_eq!(result.message, "Pass PASS-0001 is expired");
}

// ── repurchase rules ─────────────────────────────────────────────────

#[test]
fn repurchase_blocked_while_active_allowed_after_exhaustion() {
    let mut system = seeded_system();
    system
        .purchase_pass(&four_wheeler(), &toll_id(), &booth("B1"), PassClass::Single)
        .unwrap();

    // Still active (never used): second purchase rejected.
    let err = system
        .purchase_pass(&four_wheeler(), &toll_id(), &booth("B1"), PassClass::Return)
        .unwrap_err();
    assert!(matches!(err, SystemError::DuplicateActivePass { .. }));

    // Exhaust the pass, then repurchase succeeds.
    system.clock().advance(Duration::minutes(10));
    assert!(system
        .process_passage(&four_wheeler(), &toll_id(), &booth("B1"))
        .unwrap()
        .allowed);
    let second = system
        .purchase_pass(&four_wheeler(), &toll_id(), &booth("B1"), PassClass::Return)
        .unwrap();
    assert_eq!(second.pass_id.as_str(), "PASS-0002");
}

#[test]
fn repurchase_allowed_after_expiry_and_new_pass_wins_passage() {
    let mut system = seeded_system();
    system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B1"), PassClass::Single)
        .unwrap();

    // Use it, then move a day ahead: expired by time, exhausted by use.
    system.clock().set(t("2026-01-15T09:00:00Z"));
    assert!(system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap()
        .allowed);
    system.clock().set(t("2026-01-16T09:00:00Z"));

    let second = system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B2"), PassClass::Return)
        .unwrap();

    // Passage now evaluates the new pass, not the dead one.
    let result = system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B2"))
        .unwrap();
    assert!(result.allowed);
    assert_eq!(result.pass.unwrap().pass_id, second.pass_id);
}

// ── side effects: audit log and booth statistics ─────────────────────

#[test]
fn audit_log_records_purchases_and_passages_but_not_denials() {
    let mut system = seeded_system();
    system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B1"), PassClass::Return)
        .unwrap();
    system.clock().advance(Duration::hours(1));
    assert!(system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap()
        .allowed);

    // A denial adds nothing to the log.
    system.clock().advance(Duration::days(2));
    assert!(!system
        .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
        .unwrap()
        .allowed);

    let log = system.store().audit_log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].kind, AuditKind::Purchase);
    assert_eq!(log[0].amount, 80);
    assert_eq!(log[1].kind, AuditKind::Passage);
    assert_eq!(log[1].amount, 0);
    assert_eq!(log[0].audit_id.as_str(), "TXN-00001");
    assert_eq!(log[1].audit_id.as_str(), "TXN-00002");
}

#[test]
fn booth_counters_split_revenue_from_traffic() {
    let mut system = seeded_system();
    system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B1"), PassClass::SevenDay)
        .unwrap();

    system.clock().advance(Duration::hours(2));
    for _ in 0..3 {
        assert!(system
            .process_passage(&two_wheeler(), &toll_id(), &booth("B2"))
            .unwrap()
            .allowed);
    }

    // Purchase booth: revenue only. Passage booth: traffic only.
    let b1 = system.store().booth(&toll_id(), &booth("B1")).unwrap();
    assert_eq!(b1.revenue_collected, 250);
    assert_eq!(b1.vehicles_processed, 0);

    let b2 = system.store().booth(&toll_id(), &booth("B2")).unwrap();
    assert_eq!(b2.revenue_collected, 0);
    assert_eq!(b2.vehicles_processed, 3);
}

// ── invariants across a long sequence ────────────────────────────────

#[test]
fn uses_remaining_is_non_increasing_and_window_set_once() {
    let mut system = seeded_system();
    let pass = system
        .purchase_pass(&two_wheeler(), &toll_id(), &booth("B1"), PassClass::SevenDay)
        .unwrap();

    let mut last_uses = pass.uses_remaining;
    let mut window = None;
    for hour in 1..=12 {
        system.clock().advance(Duration::hours(1));
        let result = system
            .process_passage(&two_wheeler(), &toll_id(), &booth("B1"))
            .unwrap();
        assert!(result.allowed, "hour {hour} should be inside the window");
        let snapshot = result.pass.unwrap();

        assert!(snapshot.uses_remaining <= last_uses);
        last_uses = snapshot.uses_remaining;

        // valid_until is set on the first use and never recomputed.
        match window {
            None => window = snapshot.valid_until,
            Some(w) => assert_eq!(snapshot.valid_until, Some(w)),
        }
        assert!(snapshot.valid_until.is_some());
    }

    // Anchored at T0+1h, so the window ends seven days later.
    assert_eq!(window, Some(t("2026-01-22T09:00:00Z")));
}
