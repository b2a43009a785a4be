//! Trait-based conversions between outcomes and std `Result` values.

use std::fmt::Display;

use super::OutcomeError;
use crate::Outcome;

impl<T> Outcome<T> {
    /// Converts the outcome into a std `Result`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutcomeError`] carrying the failure message when the
    /// outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{Outcome, OutcomeError};
    ///
    /// fn next_id(outcome: Outcome<u32>) -> Result<u32, OutcomeError> {
    ///     let id = outcome.into_result()?;
    ///     Ok(id + 1)
    /// }
    ///
    /// assert_eq!(next_id(Outcome::success(5)), Ok(6));
    /// assert!(next_id(Outcome::failure("boom")).is_err());
    /// ```
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(OutcomeError::new(message)),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, OutcomeError> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    /// Renders the error through `Display`, the same rendering the
    /// combinators apply to captured fault messages.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.to_string()),
        }
    }
}
