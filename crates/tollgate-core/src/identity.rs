//! # Domain Identity Newtypes
//!
//! Newtype wrappers for every identifier namespace in the system. A
//! `BoothId` cannot be passed where a `TollId` is expected, and a pass
//! identifier can never be confused with the vehicle registration it
//! was sold to.
//!
//! Identifiers are opaque strings: pass and audit IDs are minted by the
//! injected ID generator, while toll, booth, and vehicle identifiers
//! come from the registry seeding (`"T1"`, `"B2"`, `"MH-12-AB-1234"`).

use serde::{Deserialize, Serialize};

/// Unique identifier for a toll pass.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PassId(pub String);

/// Unique identifier for an append-only audit record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuditId(pub String);

/// Unique identifier for a toll plaza.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TollId(pub String);

/// Identifier for a booth within a toll plaza.
///
/// Booth IDs are unique per toll, not globally — `("T1", "B1")` and
/// `("T2", "B1")` are different booths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoothId(pub String);

/// Vehicle registration number (e.g., `"MH-12-AB-1234"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleReg(pub String);

impl PassId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AuditId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TollId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl BoothId {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl VehicleReg {
    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for AuditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for TollId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for BoothId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for VehicleReg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_inner_string() {
        assert_eq!(PassId("PASS-0001".into()).to_string(), "PASS-0001");
        assert_eq!(TollId("T1".into()).to_string(), "T1");
        assert_eq!(VehicleReg("MH-12-AB-1234".into()).to_string(), "MH-12-AB-1234");
    }

    #[test]
    fn test_serde_is_transparent_newtype() {
        let json = serde_json::to_string(&BoothId("B1".into())).unwrap();
        assert_eq!(json, "\"B1\"");
        let parsed: BoothId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BoothId("B1".into()));
    }
}
