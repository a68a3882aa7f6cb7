//! # The Toll Pass Entity
//!
//! `TollPass` links a vehicle to a toll plaza with a usage count and a
//! time window. It is the one mutable record in the system, and the
//! only code allowed to mutate it lives in `lifecycle.rs`.
//!
//! ## Field Invariants
//!
//! - `valid_until` is set iff `first_used_at` is set, and equals
//!   `first_used_at + duration(pass_class)`. The window is computed once,
//!   at first use, and never recomputed.
//! - `uses_remaining` only decreases and never goes below zero.
//! - `status` is `EXHAUSTED` iff `uses_remaining == 0`, independent of
//!   time; `EXPIRED` iff uses remain but the window has elapsed as of
//!   the last evaluation; `ACTIVE` otherwise.
//!
//! The defining correctness property of the whole system lives here:
//! the validity window is anchored to **first use**, not purchase. A
//! pass bought in the morning and first used in the evening keeps its
//! full duration.

use serde::{Deserialize, Serialize};

use tollgate_core::{PassClass, PassId, PassStatus, Timestamp, TollId, VehicleClass, VehicleReg};

use crate::pricing::PriceTable;

/// A toll pass granting timed, usage-limited passage at one toll plaza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollPass {
    /// Unique pass identifier, minted at purchase.
    pub pass_id: PassId,
    /// The vehicle this pass was sold to (by reference).
    pub vehicle_reg: VehicleReg,
    /// The toll plaza this pass is valid at (by reference).
    pub toll_id: TollId,
    /// Pass class, fixed at purchase.
    pub pass_class: PassClass,
    /// Vehicle class, fixed at purchase (determines price only).
    pub vehicle_class: VehicleClass,
    /// Price paid, in rupees.
    pub price: u32,
    /// When the pass was bought.
    pub purchased_at: Timestamp,
    /// When the pass was first used. `None` until the first successful
    /// passage anchors the validity window.
    pub first_used_at: Option<Timestamp>,
    /// End of the validity window, set together with `first_used_at`.
    pub valid_until: Option<Timestamp>,
    /// Uses left. Starts at the class maximum, only ever decreases.
    pub uses_remaining: u32,
    /// Lifecycle status as of the last evaluation.
    pub status: PassStatus,
}

impl TollPass {
    /// Create a freshly purchased pass.
    ///
    /// Price and use count come from the pricing table; the validity
    /// window stays unset until the first successful passage.
    pub fn purchase(
        pass_id: PassId,
        vehicle_reg: VehicleReg,
        toll_id: TollId,
        pass_class: PassClass,
        vehicle_class: VehicleClass,
        purchased_at: Timestamp,
    ) -> Self {
        Self {
            pass_id,
            vehicle_reg,
            toll_id,
            pass_class,
            vehicle_class,
            price: PriceTable::price(vehicle_class, pass_class),
            purchased_at,
            first_used_at: None,
            valid_until: None,
            uses_remaining: PriceTable::max_uses(pass_class),
            status: PassStatus::Active,
        }
    }

    /// Whether the validity window has been anchored by a first use.
    pub fn is_anchored(&self) -> bool {
        self.first_used_at.is_some()
    }
}
