//! # System Errors
//!
//! Failures of the orchestrated operations. Two families:
//!
//! - **Not found** — the referenced vehicle, toll, or booth does not
//!   exist. Surfaced to the caller, never retried.
//! - **Business rule violation** — a second active pass for the same
//!   (vehicle, toll) pair. A rejected operation, not a system fault.
//!
//! A denied passage is **not** an error: it is a successful
//! `process_passage` call whose result carries `allowed = false`.

use thiserror::Error;

use tollgate_core::{BoothId, PassClass, PassId, TollId, VehicleReg};
use tollgate_pass::LifecycleError;

/// Error from a purchase or passage operation.
#[derive(Error, Debug)]
pub enum SystemError {
    /// The vehicle is not registered.
    #[error("vehicle {0} not registered")]
    VehicleUnknown(VehicleReg),

    /// The toll plaza does not exist.
    #[error("toll {0} not found")]
    TollUnknown(TollId),

    /// The booth does not exist at the given plaza.
    #[error("booth {booth_id} not found at toll {toll_id}")]
    BoothUnknown {
        /// The plaza that was looked up.
        toll_id: TollId,
        /// The missing booth.
        booth_id: BoothId,
    },

    /// The vehicle already holds a currently-active pass at this toll.
    #[error("vehicle already holds an active {pass_class} pass at this toll: {pass_id}")]
    DuplicateActivePass {
        /// The blocking pass.
        pass_id: PassId,
        /// Its class.
        pass_class: PassClass,
    },

    /// A lifecycle precondition was violated. Unreachable when the
    /// evaluate-anchor-consume ordering is respected.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}
