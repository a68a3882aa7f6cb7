//! # tollgate-pass — Pass Lifecycle Engine
//!
//! The temporal state machine at the heart of the toll system: decides
//! when a purchased pass's validity window starts, whether a passage
//! attempt is allowed, and how the pass's state evolves.
//!
//! ```text
//!                 purchase            first use (anchors window)
//!  (no pass) ──────────▶ ACTIVE ────────────▶ ACTIVE
//!                           │   window elapses    │  last use spent
//!                           │        ┌────────────┤
//!                           ▼        ▼            ▼
//!                        EXPIRED ◀───┘        EXHAUSTED (terminal)
//! ```
//!
//! ## Modules
//!
//! - **`pass`**: the `TollPass` entity and its field invariants.
//! - **`pricing`**: the static (vehicle class, pass class) table of
//!   price, duration, and use count. Exhaustive matches over the closed
//!   enums.
//! - **`validation`**: the pure evaluator — `pass.evaluate(now)` returns
//!   a [`ValidationOutcome`] and mutates nothing.
//! - **`lifecycle`**: the mutator — anchoring the window on first use,
//!   consuming uses, recomputing the stored status.
//!
//! ## The Load-Bearing Rule
//!
//! The validity window is anchored to **first use**, not purchase. A
//! pass bought and left in the glovebox for a week loses nothing; its
//! clock starts the first time it opens a gate.

pub mod lifecycle;
pub mod pass;
pub mod pricing;
pub mod validation;

pub use lifecycle::LifecycleError;
pub use pass::TollPass;
pub use pricing::PriceTable;
pub use validation::{DenialReason, ValidationOutcome};
