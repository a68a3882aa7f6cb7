//! # Validation Evaluator
//!
//! The pure half of the pass engine: given a pass snapshot and an
//! evaluation instant, decide whether passage may be granted. No
//! mutation happens here — the evaluator is referentially transparent
//! given `now`, and it is the single source of truth for "can this pass
//! be used right now". The orchestrator must query it before any
//! mutation.
//!
//! ## Algorithm
//!
//! 1. A pass that was never used is on its **first use**. Its clock has
//!    not started, so time cannot have expired; it is usable iff uses
//!    remain (a fresh pass always has at least one — the check guards
//!    against a violated invariant, not a reachable state).
//! 2. An already-used pass is usable iff uses remain **and** the
//!    evaluation instant is strictly before `valid_until`. The instant
//!    exactly equal to `valid_until` is outside the window.
//! 3. When both conditions fail, exhaustion is the reported reason: a
//!    pass with zero uses is unusable regardless of time.

use serde::{Deserialize, Serialize};

use tollgate_core::Timestamp;

use crate::pass::TollPass;

/// Why a pass cannot be used, when it cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The validity window has elapsed.
    Expired,
    /// No uses remain.
    Exhausted,
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Expired => "expired",
            Self::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// The verdict of evaluating a pass at an instant.
///
/// `time_valid` and `has_uses` are carried alongside the verdict
/// because the lifecycle mutator needs them to recompute the stored
/// status; on the first use `time_valid` is vacuously true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether passage may be granted.
    pub usable: bool,
    /// Why not, when `usable` is false.
    pub reason: Option<DenialReason>,
    /// Whether this evaluation is the pass's first use.
    pub is_first_use: bool,
    /// Whether the evaluation instant is inside the validity window.
    pub time_valid: bool,
    /// Whether uses remain.
    pub has_uses: bool,
}

impl TollPass {
    /// Evaluate whether this pass may be used at `now`.
    ///
    /// Pure: repeated calls with the same inputs return the same
    /// verdict, and the pass is never mutated.
    pub fn evaluate(&self, now: Timestamp) -> ValidationOutcome {
        let has_uses = self.uses_remaining > 0;

        if !self.is_anchored() {
            // First use: the validity clock has not started.
            return ValidationOutcome {
                usable: has_uses,
                reason: if has_uses { None } else { Some(DenialReason::Exhausted) },
                is_first_use: true,
                time_valid: true,
                has_uses,
            };
        }

        let time_valid = match self.valid_until {
            // Strict: the instant exactly at valid_until is outside the window.
            Some(valid_until) => now < valid_until,
            // An anchored pass always carries a window; a missing one is
            // a violated invariant and is treated as elapsed.
            None => false,
        };

        let (usable, reason) = if !has_uses {
            (false, Some(DenialReason::Exhausted))
        } else if !time_valid {
            (false, Some(DenialReason::Expired))
        } else {
            (true, None)
        };

        ValidationOutcome {
            usable,
            reason,
            is_first_use: false,
            time_valid,
            has_uses,
        }
    }
}
