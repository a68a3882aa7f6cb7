//! # Registry Entities
//!
//! Vehicles, toll plazas, and booths. These are looked-up collaborator
//! data for the pass engine: the orchestrator checks that they exist
//! and reads the vehicle class for pricing, but only the booth
//! statistics counters ever change, and only from the orchestrator's
//! side effects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tollgate_core::{BoothId, TollId, VehicleClass, VehicleReg};

/// A registered vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Registration number, the vehicle's identity.
    pub reg: VehicleReg,
    /// Class, used for pricing only.
    pub vehicle_class: VehicleClass,
}

/// A single toll gate at a plaza, with its traffic and revenue counters.
///
/// Both counters are monotonically increasing: a purchase adds revenue
/// without counting a vehicle, a passage counts a vehicle without
/// adding revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollBooth {
    /// Booth identifier, unique within its toll.
    pub booth_id: BoothId,
    /// The plaza this booth belongs to.
    pub toll_id: TollId,
    /// Human-readable name (e.g., "Booth A").
    pub name: String,
    /// Vehicles that passed through this booth.
    pub vehicles_processed: u64,
    /// Total revenue collected at this booth, in rupees.
    pub revenue_collected: u64,
}

impl TollBooth {
    /// Create a booth with zeroed counters.
    pub fn new(booth_id: BoothId, toll_id: TollId, name: impl Into<String>) -> Self {
        Self {
            booth_id,
            toll_id,
            name: name.into(),
            vehicles_processed: 0,
            revenue_collected: 0,
        }
    }
}

/// A toll plaza with its booths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toll {
    /// Plaza identifier.
    pub toll_id: TollId,
    /// Human-readable name (e.g., "Mumbai-Pune Expressway Toll").
    pub name: String,
    /// Physical location.
    pub location: String,
    /// Booths at this plaza, keyed by booth ID.
    pub booths: BTreeMap<BoothId, TollBooth>,
}

impl Toll {
    /// Create a plaza with the given booths.
    pub fn new(
        toll_id: TollId,
        name: impl Into<String>,
        location: impl Into<String>,
        booths: impl IntoIterator<Item = TollBooth>,
    ) -> Self {
        Self {
            toll_id,
            name: name.into(),
            location: location.into(),
            booths: booths
                .into_iter()
                .map(|booth| (booth.booth_id.clone(), booth))
                .collect(),
        }
    }
}
