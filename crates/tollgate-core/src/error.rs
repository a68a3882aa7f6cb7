//! # Core Error Types
//!
//! Errors for the foundational crate. Higher layers define their own
//! error enums (`LifecycleError` in `tollgate-pass`, `SystemError` in
//! `tollgate-system`); this one covers only construction failures of
//! the core types themselves.

use thiserror::Error;

/// Error constructing a core type.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A timestamp string could not be parsed or was not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
