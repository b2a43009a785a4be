//! The error carried out of a failed outcome.

use thiserror::Error;

/// Failure message of an [`Outcome`](crate::Outcome), usable as a std error.
///
/// Produced by [`Outcome::into_result`](crate::Outcome::into_result) so
/// callers can leave the outcome world and propagate the failure with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OutcomeError {
    message: String,
}

impl OutcomeError {
    /// Wraps a failure message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Borrows the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
