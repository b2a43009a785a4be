//! Outcome container representing a concluded computation.
//!
//! The two states are mutually exclusive by construction: a success holds
//! only its value and a failure holds only its message, so no accessor can
//! observe an invalid mixture.

/// Result of a concluded computation: a value or a failure message.
///
/// Outcomes are immutable once constructed and carry no interior state, so
/// they may be shared or cloned freely. Failure messages are free-form
/// text; an empty message is legal and no validation is applied.
///
/// # Examples
///
/// ```rust
/// use outcome::Outcome;
///
/// let ok = Outcome::success(5);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&5));
/// assert_eq!(ok.error(), None);
///
/// let bad: Outcome<i32> = Outcome::failure("parse failed");
/// assert!(bad.is_failure());
/// assert_eq!(bad.value(), None);
/// assert_eq!(bad.error(), Some("parse failed"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a message describing why.
    Failure(String),
}

impl<T> Outcome<T> {
    /// Wraps a computed value in a successful outcome.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a failure message in a failed outcome.
    ///
    /// No value is fabricated for the failure state; [`value`](Self::value)
    /// reads [`None`] until a later combinator produces a success.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Returns `true` when the outcome holds a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the outcome holds a failure message.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    /// Consumes the outcome, yielding the success value if present.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, yielding the failure message if present.
    #[must_use]
    pub fn into_error(self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }
}
