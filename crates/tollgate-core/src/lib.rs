//! # tollgate-core — Foundational Types for the Tollgate System
//!
//! This crate is the leaf of the workspace DAG: every other crate
//! depends on it, and it depends on nothing internal. It defines the
//! type-system primitives the pass engine is built on.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `PassId`, `AuditId`,
//!    `TollId`, `BoothId`, `VehicleReg` — no bare strings crossing API
//!    boundaries, no cross-namespace identifier confusion.
//!
//! 2. **Closed enums with exhaustive matches.** `PassClass`,
//!    `VehicleClass`, and `PassStatus` are sum types; every pricing and
//!    lifecycle lookup matches exhaustively, so a new class cannot be
//!    added without updating every lookup site.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision. Expiry comparisons are plain ordered
//!    comparisons on this one type.
//!
//! 4. **Injected time.** Nothing in the workspace calls the system
//!    clock directly; every evaluation instant flows through the
//!    `Clock` trait.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tollgate-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod class;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use class::{PassClass, PassStatus, VehicleClass};
pub use error::CoreError;
pub use identity::{AuditId, BoothId, PassId, TollId, VehicleReg};
pub use temporal::{Clock, ManualClock, SystemClock, Timestamp};
