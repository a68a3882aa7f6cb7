//! # Identifier Generation
//!
//! Pass and audit IDs are minted by an injected generator rather than a
//! process-global counter. [`SequentialIds`] reproduces the historical
//! `PASS-0001` / `TXN-00001` sequences, seeded from the stored record
//! counts at startup; [`UuidIds`] trades the readable sequence for
//! collision-freedom when the startup counts cannot be trusted.

use tollgate_core::{AuditId, PassId};

/// Mints pass and audit identifiers for the orchestrator.
pub trait IdGenerator {
    /// Mint the next pass identifier.
    fn next_pass_id(&mut self) -> PassId;

    /// Mint the next audit record identifier.
    fn next_audit_id(&mut self) -> AuditId;
}

/// Monotonic counters producing `PASS-0001` / `TXN-00001` style IDs.
///
/// Uniqueness across restarts depends on the seed counts being accurate
/// — which is exactly the persistence concern the collaborator owns.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next_pass: u64,
    next_audit: u64,
}

impl SequentialIds {
    /// Seed the counters from the number of existing records.
    pub fn seeded(pass_count: usize, audit_count: usize) -> Self {
        Self {
            next_pass: pass_count as u64 + 1,
            next_audit: audit_count as u64 + 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_pass_id(&mut self) -> PassId {
        let id = PassId(format!("PASS-{:04}", self.next_pass));
        self.next_pass += 1;
        id
    }

    fn next_audit_id(&mut self) -> AuditId {
        let id = AuditId(format!("TXN-{:05}", self.next_audit));
        self.next_audit += 1;
        id
    }
}

/// Random v4 UUID identifiers; immune to restart-time collisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_pass_id(&mut self) -> PassId {
        PassId(format!("PASS-{}", uuid::Uuid::new_v4()))
    }

    fn next_audit_id(&mut self) -> AuditId {
        AuditId(format!("TXN-{}", uuid::Uuid::new_v4()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_formats() {
        let mut ids = SequentialIds::seeded(0, 0);
        assert_eq!(ids.next_pass_id(), PassId("PASS-0001".into()));
        assert_eq!(ids.next_pass_id(), PassId("PASS-0002".into()));
        assert_eq!(ids.next_audit_id(), AuditId("TXN-00001".into()));
        assert_eq!(ids.next_audit_id(), AuditId("TXN-00002".into()));
    }

    #[test]
    fn test_sequential_seeding_continues_after_restart() {
        let mut ids = SequentialIds::seeded(12, 345);
        assert_eq!(ids.next_pass_id(), PassId("PASS-0013".into()));
        assert_eq!(ids.next_audit_id(), AuditId("TXN-00346".into()));
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_pass_id(), ids.next_pass_id());
        assert_ne!(ids.next_audit_id(), ids.next_audit_id());
    }
}
