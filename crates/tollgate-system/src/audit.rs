//! # Audit Records
//!
//! Immutable, append-only records of toll activity: one per purchase
//! (carrying the full price) and one per passage that actually consumed
//! a use (carrying amount zero). Denied attempts are not recorded.

use serde::{Deserialize, Serialize};

use tollgate_core::{AuditId, BoothId, PassId, Timestamp, TollId, VehicleClass, VehicleReg};

/// What kind of activity an audit record captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    /// A pass was bought; `amount` is the price paid.
    Purchase,
    /// A vehicle passed through on a valid pass; `amount` is zero.
    Passage,
}

impl std::fmt::Display for AuditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Purchase => "PURCHASE",
            Self::Passage => "PASSAGE",
        };
        f.write_str(s)
    }
}

/// One immutable audit entry. Never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique record identifier, minted by the ID generator.
    pub audit_id: AuditId,
    /// Booth that processed the activity.
    pub booth_id: BoothId,
    /// Plaza the booth belongs to.
    pub toll_id: TollId,
    /// Vehicle involved.
    pub vehicle_reg: VehicleReg,
    /// Vehicle class, denormalized for reporting.
    pub vehicle_class: VehicleClass,
    /// Purchase or passage.
    pub kind: AuditKind,
    /// The pass involved.
    pub pass_id: Option<PassId>,
    /// Rupees charged: the price for a purchase, zero for a passage.
    pub amount: u32,
    /// When the activity happened.
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(AuditKind::Purchase.to_string(), "PURCHASE");
        assert_eq!(AuditKind::Passage.to_string(), "PASSAGE");
    }

    #[test]
    fn test_serde_roundtrip() {
        let record = AuditRecord {
            audit_id: AuditId("TXN-00001".into()),
            booth_id: BoothId("B1".into()),
            toll_id: TollId("T1".into()),
            vehicle_reg: VehicleReg("MH-12-AB-1234".into()),
            vehicle_class: VehicleClass::TwoWheeler,
            kind: AuditKind::Purchase,
            pass_id: Some(PassId("PASS-0001".into())),
            amount: 80,
            timestamp: Timestamp::parse("2026-01-15T08:00:00Z").unwrap(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: AuditRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
