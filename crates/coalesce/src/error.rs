//! Error types for the coalesce crate.

use thiserror::Error;

/// Errors returned by the fallible coalesce operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoalesceError {
    /// Every candidate was the zero value, or there were none.
    #[error("all {inspected} candidates were empty")]
    AllEmpty {
        /// Number of candidates scanned.
        inspected: usize,
    },
}

/// Result type for coalesce operations.
pub type Result<T> = std::result::Result<T, CoalesceError>;
