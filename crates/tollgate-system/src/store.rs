//! # The Store Seam
//!
//! The pass engine never performs I/O. Everything it needs from the
//! outside world — entity lookups, pass persistence, audit appends,
//! booth counters — goes through the [`TollStore`] trait, so a database
//! adapter and the in-memory [`MemoryStore`] are interchangeable.
//!
//! ## Atomicity Expectation
//!
//! The orchestrator's fetch → evaluate → mutate → save sequence for one
//! pass must not interleave with another attempt on the same pass.
//! `MemoryStore` relies on the orchestrator being driven from one
//! thread; a persistent implementation is expected to provide
//! per-record locking or a compare-and-swap on the pass row.

use std::collections::BTreeMap;

use tollgate_core::{BoothId, PassId, TollId, VehicleClass, VehicleReg};
use tollgate_pass::TollPass;

use crate::audit::AuditRecord;
use crate::registry::{Toll, TollBooth, Vehicle};

/// Collaborator interface for lookups and persistence.
pub trait TollStore {
    /// The class of a registered vehicle, or `None` if unknown.
    fn vehicle_class(&self, reg: &VehicleReg) -> Option<VehicleClass>;

    /// Whether a vehicle is registered.
    fn vehicle_exists(&self, reg: &VehicleReg) -> bool {
        self.vehicle_class(reg).is_some()
    }

    /// Whether a toll plaza exists.
    fn toll_exists(&self, toll_id: &TollId) -> bool;

    /// Whether a booth exists at the given plaza.
    fn booth_exists_at(&self, toll_id: &TollId, booth_id: &BoothId) -> bool;

    /// Fetch a pass snapshot by ID.
    fn pass(&self, pass_id: &PassId) -> Option<TollPass>;

    /// All passes ever sold to a vehicle at a plaza, oldest first.
    fn passes_for(&self, reg: &VehicleReg, toll_id: &TollId) -> Vec<TollPass>;

    /// The most recently purchased pass for a (vehicle, toll) pair.
    ///
    /// This is the candidate a passage attempt evaluates. Its stored
    /// status may be stale; the orchestrator re-runs the evaluator
    /// rather than trusting it.
    fn latest_pass(&self, reg: &VehicleReg, toll_id: &TollId) -> Option<TollPass>;

    /// Number of passes ever stored. Seeds the sequential ID generator.
    fn pass_count(&self) -> usize;

    /// Number of audit records ever appended. Seeds the ID generator.
    fn audit_count(&self) -> usize;

    /// Insert or update a pass snapshot.
    fn save_pass(&mut self, pass: &TollPass);

    /// Append an immutable audit record.
    fn append_audit(&mut self, record: AuditRecord);

    /// Add collected revenue to a booth's counter.
    fn add_booth_revenue(&mut self, toll_id: &TollId, booth_id: &BoothId, amount: u32);

    /// Count one processed vehicle at a booth.
    fn add_booth_traffic(&mut self, toll_id: &TollId, booth_id: &BoothId);
}

/// HashMap-and-Vec backed store for tests, demos, and single-process use.
///
/// Passes are kept in purchase order so `latest_pass` is the last
/// matching element regardless of the ID scheme in use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    vehicles: BTreeMap<VehicleReg, Vehicle>,
    tolls: BTreeMap<TollId, Toll>,
    passes: Vec<TollPass>,
    audit_log: Vec<AuditRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.reg.clone(), vehicle);
    }

    /// Register a toll plaza with its booths.
    pub fn add_toll(&mut self, toll: Toll) {
        self.tolls.insert(toll.toll_id.clone(), toll);
    }

    /// Read a booth's current statistics.
    pub fn booth(&self, toll_id: &TollId, booth_id: &BoothId) -> Option<&TollBooth> {
        self.tolls.get(toll_id)?.booths.get(booth_id)
    }

    /// The full audit log, oldest first.
    pub fn audit_log(&self) -> &[AuditRecord] {
        &self.audit_log
    }

    fn booth_mut(&mut self, toll_id: &TollId, booth_id: &BoothId) -> Option<&mut TollBooth> {
        self.tolls.get_mut(toll_id)?.booths.get_mut(booth_id)
    }
}

impl TollStore for MemoryStore {
    fn vehicle_class(&self, reg: &VehicleReg) -> Option<VehicleClass> {
        self.vehicles.get(reg).map(|v| v.vehicle_class)
    }

    fn toll_exists(&self, toll_id: &TollId) -> bool {
        self.tolls.contains_key(toll_id)
    }

    fn booth_exists_at(&self, toll_id: &TollId, booth_id: &BoothId) -> bool {
        self.booth(toll_id, booth_id).is_some()
    }

    fn pass(&self, pass_id: &PassId) -> Option<TollPass> {
        self.passes.iter().find(|p| &p.pass_id == pass_id).cloned()
    }

    fn passes_for(&self, reg: &VehicleReg, toll_id: &TollId) -> Vec<TollPass> {
        self.passes
            .iter()
            .filter(|p| &p.vehicle_reg == reg && &p.toll_id == toll_id)
            .cloned()
            .collect()
    }

    fn latest_pass(&self, reg: &VehicleReg, toll_id: &TollId) -> Option<TollPass> {
        self.passes
            .iter()
            .rev()
            .find(|p| &p.vehicle_reg == reg && &p.toll_id == toll_id)
            .cloned()
    }

    fn pass_count(&self) -> usize {
        self.passes.len()
    }

    fn audit_count(&self) -> usize {
        self.audit_log.len()
    }

    fn save_pass(&mut self, pass: &TollPass) {
        match self.passes.iter_mut().find(|p| p.pass_id == pass.pass_id) {
            Some(existing) => *existing = pass.clone(),
            None => self.passes.push(pass.clone()),
        }
    }

    fn append_audit(&mut self, record: AuditRecord) {
        self.audit_log.push(record);
    }

    fn add_booth_revenue(&mut self, toll_id: &TollId, booth_id: &BoothId, amount: u32) {
        if let Some(booth) = self.booth_mut(toll_id, booth_id) {
            booth.revenue_collected += u64::from(amount);
        }
    }

    fn add_booth_traffic(&mut self, toll_id: &TollId, booth_id: &BoothId) {
        if let Some(booth) = self.booth_mut(toll_id, booth_id) {
            booth.vehicles_processed += 1;
        }
    }
}
