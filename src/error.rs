//! Error types for graph generation.

use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a network graph.
///
/// Generation itself is total; the only failure is an argument outside the
/// valid domain. Out-of-range values are rejected rather than clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument was outside its valid range.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
