//! # Temporal Types — UTC-Only Timestamps and the Clock Seam
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to seconds
//! precision, and the `Clock` trait through which every evaluation
//! receives its notion of "now".
//!
//! ## Invariant
//!
//! All timestamps in the system are UTC. Pass validity windows are
//! compared with plain `<` / `>=` on `Timestamp`, so a single ambiguous
//! local-time value anywhere would corrupt expiry decisions. Non-UTC
//! inputs are rejected at construction.
//!
//! ## Clock Injection
//!
//! The validity window of a pass is anchored to its first use, which
//! makes every verdict a function of the evaluation instant. Production
//! code uses [`SystemClock`]; tests drive a [`ManualClock`] to pin the
//! instant and walk it forward across a scenario.

use std::ops::Add;

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only the `Z` suffix is accepted —
    /// explicit offsets like `+00:00` or `+05:30` are rejected even when
    /// semantically equivalent to UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !s.ends_with('Z') {
            return Err(CoreError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CoreError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    /// Offset a timestamp by a duration. Used to compute `valid_until`
    /// from the first-use instant and a pass class duration.
    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(truncate_to_seconds(self.0 + rhs))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── Clock ───────────────────────────────────────────────────────────

/// Source of the current instant for pass evaluation.
///
/// Every passage attempt and purchase receives its "now" through this
/// trait so the temporal state machine is fully deterministic under test.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Manually driven clock for tests and replays.
///
/// Holds a fixed instant that callers advance explicitly. Interior
/// mutability keeps the `Clock` impl on `&self`, matching how the
/// orchestrator borrows its clock.
#[derive(Debug)]
pub struct ManualClock(std::cell::Cell<Timestamp>);

impl ManualClock {
    /// Create a manual clock pinned at the given instant.
    pub fn starting_at(instant: Timestamp) -> Self {
        Self(std::cell::Cell::new(instant))
    }

    /// Pin the clock to a new instant.
    pub fn set(&self, instant: Timestamp) {
        self.0.set(instant);
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.0.get()
    }
}
