//! # Passage Orchestrator
//!
//! Sequences one passage attempt — lookup, evaluate, mutate, record —
//! and handles pass purchase. The orchestrator owns every side effect
//! in the system: pass persistence, audit appends, and booth counters
//! all happen here, and only after the evaluator's verdict.
//!
//! ## Ordering Contract
//!
//! For a passage attempt: (a) evaluate; (b) on a usable first use,
//! anchor the validity window; (c) recompute the stored status (skipped
//! on the true first use); (d) on a usable pass, consume one use. The
//! mutations of (b)-(d) reach the store as a single `save_pass`.
//!
//! One deliberate asymmetry, kept for behavioral compatibility: a
//! denied attempt on an already-used pass still persists the recomputed
//! status — checking a pass can flip its stored ACTIVE to EXPIRED with
//! a write — while the "no pass at all" denial persists nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tollgate_core::{
    BoothId, Clock, PassClass, PassId, PassStatus, Timestamp, TollId, VehicleClass, VehicleReg,
};
use tollgate_pass::{PriceTable, TollPass};

use crate::audit::{AuditKind, AuditRecord};
use crate::error::SystemError;
use crate::ids::IdGenerator;
use crate::store::TollStore;

/// One purchasable pass option, as offered to a denied vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOption {
    /// The pass class on offer.
    pub pass_class: PassClass,
    /// Price for the vehicle's class, in rupees.
    pub price: u32,
    /// Human-readable validity duration ("1 hour", "24 hours", "7 days").
    pub duration: String,
    /// Maximum number of uses.
    pub max_uses: u32,
    /// Catalog description.
    pub description: String,
}

/// The caller-facing view of a pass, attached to passage results so a
/// denial can explain itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSnapshot {
    /// Pass identifier.
    pub pass_id: PassId,
    /// Pass class.
    pub pass_class: PassClass,
    /// Status as of this attempt.
    pub status: PassStatus,
    /// End of the validity window, if anchored.
    pub valid_until: Option<Timestamp>,
    /// Uses left.
    pub uses_remaining: u32,
}

impl PassSnapshot {
    fn of(pass: &TollPass) -> Self {
        Self {
            pass_id: pass.pass_id.clone(),
            pass_class: pass.pass_class,
            status: pass.status,
            valid_until: pass.valid_until,
            uses_remaining: pass.uses_remaining,
        }
    }
}

/// Outcome of one passage attempt.
///
/// A denial is a successful call: `allowed` is false, the message says
/// why, and `offered_options` lists what the vehicle could buy instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageResult {
    /// Whether the barrier opens.
    pub allowed: bool,
    /// Human-readable explanation.
    pub message: String,
    /// The pass involved, post-mutation. `None` when no pass was found.
    pub pass: Option<PassSnapshot>,
    /// Purchase options for the vehicle's class, attached on denial.
    pub offered_options: Option<Vec<PassOption>>,
}

/// The orchestrator: wires the pass engine to its collaborators.
///
/// Generic over the store seam, the clock, and the ID generator so
/// tests drive it with a [`crate::MemoryStore`], a
/// [`tollgate_core::ManualClock`], and seeded sequential IDs.
#[derive(Debug)]
pub struct TollSystem<S, C, G> {
    store: S,
    clock: C,
    ids: G,
}

impl<S: TollStore, C: Clock, G: IdGenerator> TollSystem<S, C, G> {
    /// Build a system from its collaborators.
    pub fn new(store: S, clock: C, ids: G) -> Self {
        Self { store, clock, ids }
    }

    /// Read access to the store (booth statistics, audit log).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The injected clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The pass options purchasable by a vehicle class.
    pub fn pass_options(&self, vehicle_class: VehicleClass) -> Vec<PassOption> {
        PassClass::ALL
            .iter()
            .map(|&pass_class| PassOption {
                pass_class,
                price: PriceTable::price(vehicle_class, pass_class),
                duration: PriceTable::format_duration(PriceTable::duration(pass_class)),
                max_uses: PriceTable::max_uses(pass_class),
                description: PriceTable::describe(pass_class).to_string(),
            })
            .collect()
    }

    /// Purchase a pass for a vehicle at a toll booth.
    ///
    /// Rejects the purchase if the vehicle already holds a pass at this
    /// toll whose **evaluated** status is active as of now — every
    /// stored pass for the pair is re-run through the evaluator, since
    /// a stored status column can be stale.
    ///
    /// On success the new pass is persisted, a PURCHASE audit record is
    /// appended, and the booth's revenue counter grows by the price. A
    /// purchase is not a passage: the traffic counter is untouched.
    ///
    /// # Errors
    ///
    /// [`SystemError::VehicleUnknown`] / [`SystemError::TollUnknown`] /
    /// [`SystemError::BoothUnknown`] if a referenced entity does not
    /// exist, [`SystemError::DuplicateActivePass`] if an active pass is
    /// already held.
    pub fn purchase_pass(
        &mut self,
        reg: &VehicleReg,
        toll_id: &TollId,
        booth_id: &BoothId,
        pass_class: PassClass,
    ) -> Result<TollPass, SystemError> {
        let vehicle_class = self.require_location(reg, toll_id, booth_id)?;
        let now = self.clock.now();

        // Re-evaluate every stored pass for the pair; never trust the
        // stored status column for the duplicate check.
        for existing in self.store.passes_for(reg, toll_id) {
            if existing.evaluate(now).usable {
                return Err(SystemError::DuplicateActivePass {
                    pass_id: existing.pass_id,
                    pass_class: existing.pass_class,
                });
            }
        }

        let pass = TollPass::purchase(
            self.ids.next_pass_id(),
            reg.clone(),
            toll_id.clone(),
            pass_class,
            vehicle_class,
            now,
        );
        self.store.save_pass(&pass);

        let audit_id = self.ids.next_audit_id();
        self.store.append_audit(AuditRecord {
            audit_id,
            booth_id: booth_id.clone(),
            toll_id: toll_id.clone(),
            vehicle_reg: reg.clone(),
            vehicle_class,
            kind: AuditKind::Purchase,
            pass_id: Some(pass.pass_id.clone()),
            amount: pass.price,
            timestamp: now,
        });
        self.store.add_booth_revenue(toll_id, booth_id, pass.price);

        info!(
            pass_id = %pass.pass_id,
            vehicle = %reg,
            toll = %toll_id,
            class = %pass_class,
            price = pass.price,
            "pass purchased"
        );
        Ok(pass)
    }

    /// Process a vehicle passing through a toll booth.
    ///
    /// Evaluates the vehicle's latest pass at this toll as of now and
    /// either opens the barrier (consuming a use, appending a PASSAGE
    /// audit record, counting the vehicle at the booth) or returns a
    /// denial carrying the reason and the purchase options.
    ///
    /// # Errors
    ///
    /// The same not-found errors as [`Self::purchase_pass`]. A denial
    /// is not an error.
    pub fn process_passage(
        &mut self,
        reg: &VehicleReg,
        toll_id: &TollId,
        booth_id: &BoothId,
    ) -> Result<PassageResult, SystemError> {
        let vehicle_class = self.require_location(reg, toll_id, booth_id)?;
        let now = self.clock.now();

        let Some(mut pass) = self.store.latest_pass(reg, toll_id) else {
            info!(vehicle = %reg, toll = %toll_id, "passage denied: no pass");
            return Ok(PassageResult {
                allowed: false,
                message: "No valid pass found for this toll".to_string(),
                pass: None,
                offered_options: Some(self.pass_options(vehicle_class)),
            });
        };

        let outcome = pass.evaluate(now);
        debug!(
            pass_id = %pass.pass_id,
            usable = outcome.usable,
            first_use = outcome.is_first_use,
            "pass evaluated"
        );

        if outcome.is_first_use && outcome.usable {
            pass.anchor_first_use(now)?;
        }
        if !outcome.is_first_use {
            pass.recompute_status(outcome.time_valid, outcome.has_uses);
        }

        if !outcome.usable {
            // Persist the recomputed status even though access was
            // denied; the true first use mutated nothing, so there is
            // nothing to write on that path.
            if !outcome.is_first_use {
                self.store.save_pass(&pass);
            }
            let reason = match outcome.reason {
                Some(reason) => reason.to_string(),
                None => "denied".to_string(),
            };
            info!(pass_id = %pass.pass_id, %reason, "passage denied");
            return Ok(PassageResult {
                allowed: false,
                message: format!("Pass {} is {}", pass.pass_id, reason),
                pass: Some(PassSnapshot::of(&pass)),
                offered_options: Some(self.pass_options(vehicle_class)),
            });
        }

        pass.consume_use()?;
        self.store.save_pass(&pass);

        let audit_id = self.ids.next_audit_id();
        self.store.append_audit(AuditRecord {
            audit_id,
            booth_id: booth_id.clone(),
            toll_id: toll_id.clone(),
            vehicle_reg: reg.clone(),
            vehicle_class,
            kind: AuditKind::Passage,
            pass_id: Some(pass.pass_id.clone()),
            amount: 0,
            timestamp: now,
        });
        self.store.add_booth_traffic(toll_id, booth_id);

        info!(
            pass_id = %pass.pass_id,
            uses_remaining = pass.uses_remaining,
            "passage allowed"
        );
        Ok(PassageResult {
            allowed: true,
            message: "Passage allowed".to_string(),
            pass: Some(PassSnapshot::of(&pass)),
            offered_options: None,
        })
    }

    /// Check the vehicle, toll, and booth all exist; return the vehicle
    /// class for pricing.
    fn require_location(
        &self,
        reg: &VehicleReg,
        toll_id: &TollId,
        booth_id: &BoothId,
    ) -> Result<VehicleClass, SystemError> {
        let vehicle_class = self
            .store
            .vehicle_class(reg)
            .ok_or_else(|| SystemError::VehicleUnknown(reg.clone()))?;
        if !self.store.toll_exists(toll_id) {
            return Err(SystemError::TollUnknown(toll_id.clone()));
        }
        if !self.store.booth_exists_at(toll_id, booth_id) {
            return Err(SystemError::BoothUnknown {
                toll_id: toll_id.clone(),
                booth_id: booth_id.clone(),
            });
        }
        Ok(vehicle_class)
    }
}
