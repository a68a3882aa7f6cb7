//! # Closed Domain Enums
//!
//! The three closed enumerations of the pass engine: pass class,
//! vehicle class, and pass status. Every lookup over these enums is an
//! exhaustive `match`, so adding a variant forces every pricing and
//! lifecycle site to be updated before the workspace compiles again.
//!
//! Serde values use snake_case (`"single"`, `"two_wheeler"`, `"active"`)
//! so serialized records match the historical wire strings.

use serde::{Deserialize, Serialize};

/// The class of a toll pass, fixing its validity duration and use count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassClass {
    /// One-time use, valid for one hour from first use.
    Single,
    /// Two uses within twenty-four hours of first use.
    Return,
    /// Effectively unlimited uses for seven days from first use.
    SevenDay,
}

impl PassClass {
    /// All pass classes, in catalog order.
    pub const ALL: [PassClass; 3] = [PassClass::Single, PassClass::Return, PassClass::SevenDay];
}

/// The class of a vehicle. Determines price only, never duration or uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// Motorcycles and scooters.
    TwoWheeler,
    /// Cars, vans, and light trucks.
    FourWheeler,
}

/// The lifecycle status of a toll pass.
///
/// `Exhausted` is terminal. `Expired` is recomputed per evaluation: it
/// holds exactly when uses remain, the window has been anchored, and
/// the evaluation instant has reached `valid_until`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStatus {
    /// Pass is valid and can be used (includes the never-used state).
    Active,
    /// Validity window has elapsed while uses remained.
    Expired,
    /// No uses remaining (terminal).
    Exhausted,
}

impl PassStatus {
    /// Whether this status is permanently terminal.
    ///
    /// Only exhaustion is terminal: uses never replenish. An expired
    /// pass keeps its status recomputed on every evaluation, though
    /// monotonic time means it can never become usable again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl std::fmt::Display for PassClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Single => "SINGLE",
            Self::Return => "RETURN",
            Self::SevenDay => "SEVEN_DAY",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TwoWheeler => "TWO_WHEELER",
            Self::FourWheeler => "FOUR_WHEELER",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for PassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Exhausted => "EXHAUSTED",
        };
        f.write_str(s)
    }
}
