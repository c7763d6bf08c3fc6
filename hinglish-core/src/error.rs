//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A size or limit was outside its valid range
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CoreError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
