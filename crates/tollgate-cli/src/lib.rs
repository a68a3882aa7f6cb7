//! # tollgate-cli — Command-Line Demo
//!
//! A small driver around the in-memory system: seeds sample plazas,
//! booths, and vehicles, then walks the purchase and passage flows with
//! a manually driven clock so the first-use anchoring rule and the
//! expiry/exhaustion denials are visible in one run.
//!
//! ## Crate Policy
//!
//! - No business logic here; every decision is delegated to
//!   `tollgate-system`.
//! - Output is plain text; structured events go through `tracing`.

pub mod demo;
