//! # tollgate-system — Passage Orchestration
//!
//! Wires the pass engine of `tollgate-pass` to its collaborators: the
//! registry of vehicles, tolls, and booths, pass persistence, the
//! append-only audit log, and identifier generation.
//!
//! ## Modules
//!
//! - **`registry`**: `Vehicle`, `Toll`, `TollBooth` — looked-up
//!   entities; only the booth counters are ever mutated.
//! - **`audit`**: the immutable `AuditRecord` (one per purchase, one
//!   per consumed passage, none per denial).
//! - **`store`**: the `TollStore` collaborator trait and the in-memory
//!   `MemoryStore` used by tests, demos, and single-process deployments.
//! - **`ids`**: the injected `IdGenerator` — sequential IDs seeded from
//!   stored record counts, or UUID-backed.
//! - **`orchestrator`**: `TollSystem` with the two public operations,
//!   `purchase_pass` and `process_passage`, plus the pricing-option
//!   listing.
//!
//! ## Crate Policy
//!
//! - The orchestrator is synchronous and performs no I/O itself; every
//!   side effect goes through the store seam.
//! - A denied passage is an `Ok` result, not an error. Errors are
//!   reserved for unknown entities and business rule violations.
//! - The read-evaluate-mutate-write sequence for one pass assumes
//!   external serialization per pass record; `MemoryStore` gets this
//!   from single-threaded use.

pub mod audit;
pub mod error;
pub mod ids;
pub mod orchestrator;
pub mod registry;
pub mod store;

pub use audit::{AuditKind, AuditRecord};
pub use error::SystemError;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use orchestrator::{PassOption, PassSnapshot, PassageResult, TollSystem};
pub use registry::{Toll, TollBooth, Vehicle};
pub use store::{MemoryStore, TollStore};

// Callers matching on denial reasons or inspecting pass state need
// these without depending on the engine crate directly.
pub use tollgate_pass::{DenialReason, TollPass};
