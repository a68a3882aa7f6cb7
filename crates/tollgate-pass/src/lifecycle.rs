//! # Lifecycle Mutator
//!
//! The mutating half of the pass engine. Three operations, each applied
//! only after the evaluator has delivered its verdict:
//!
//! - [`TollPass::anchor_first_use`] — starts the validity clock, once.
//! - [`TollPass::consume_use`] — spends one use, flipping to EXHAUSTED
//!   at zero.
//! - [`TollPass::recompute_status`] — re-derives the stored status from
//!   the evaluator's time/uses flags, on every evaluation of an
//!   already-used pass (denied attempts included, so the stored status
//!   tracks the time-dependent invariant).
//!
//! ## Ordering Contract
//!
//! For one passage attempt: evaluate, then anchor (first use and usable
//! only), then recompute status (skipped on the true first use), then
//! consume (usable only). The orchestrator persists the result of
//! (anchor, recompute, consume) as one write.

use thiserror::Error;

use tollgate_core::{PassStatus, Timestamp};

use crate::pass::TollPass;
use crate::pricing::PriceTable;

/// Precondition violation in a lifecycle transition.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// The validity window was already anchored by an earlier first use.
    #[error("pass {pass_id} already anchored at {anchored_at}")]
    AlreadyAnchored {
        /// The pass whose window was already set.
        pass_id: String,
        /// The existing first-use instant.
        anchored_at: String,
    },

    /// A use was consumed on a pass with none remaining.
    #[error("pass {pass_id} has no uses remaining")]
    NoUsesRemaining {
        /// The exhausted pass.
        pass_id: String,
    },
}

impl TollPass {
    /// Anchor the validity window to the first use.
    ///
    /// Sets `first_used_at = now` and `valid_until = now + duration`.
    /// Called at most once per pass, exactly when the evaluator reported
    /// a usable first use. The window is never recomputed afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::AlreadyAnchored`] if the window is set.
    pub fn anchor_first_use(&mut self, now: Timestamp) -> Result<(), LifecycleError> {
        if let Some(first_used_at) = self.first_used_at {
            return Err(LifecycleError::AlreadyAnchored {
                pass_id: self.pass_id.to_string(),
                anchored_at: first_used_at.to_string(),
            });
        }

        self.first_used_at = Some(now);
        self.valid_until = Some(now + PriceTable::duration(self.pass_class));
        Ok(())
    }

    /// Spend one use. Flips status to EXHAUSTED when the last use goes.
    ///
    /// Called only after the pass was found usable, so the decrement can
    /// never take `uses_remaining` below zero.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::NoUsesRemaining`] if no uses are left.
    pub fn consume_use(&mut self) -> Result<(), LifecycleError> {
        if self.uses_remaining == 0 {
            return Err(LifecycleError::NoUsesRemaining {
                pass_id: self.pass_id.to_string(),
            });
        }

        self.uses_remaining -= 1;
        if self.uses_remaining == 0 {
            self.status = PassStatus::Exhausted;
        }
        Ok(())
    }

    /// Re-derive the stored status from the evaluator's flags.
    ///
    /// Exhaustion wins over expiry; a pass with uses and time left is
    /// ACTIVE. Runs on every evaluation of an already-used pass, whether
    /// or not passage was granted, so a denied attempt can flip a stored
    /// ACTIVE to EXPIRED.
    pub fn recompute_status(&mut self, time_valid: bool, has_uses: bool) {
        self.status = if !has_uses {
            PassStatus::Exhausted
        } else if !time_valid {
            PassStatus::Expired
        } else {
            PassStatus::Active
        };
    }
}
