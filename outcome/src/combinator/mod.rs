//! Combinators for chaining transformations over [`Outcome`] values.
//!
//! The combinators are the crate's fault boundary: a panic raised by a
//! user-supplied transformation is captured and becomes an ordinary
//! `Failure`, so downstream stages of a chain never need a guard of their
//! own. Capture relies on stack unwinding; under `panic = "abort"` a
//! faulting transformation terminates the process instead.
//!
//! The free functions in this module additionally accept the outcome as an
//! [`Option`] for call sites where the outcome itself may never have been
//! produced. Passing [`None`] is a caller-contract violation and panics;
//! it is deliberately not converted into a `Failure`.

mod capture;

use capture::capture;

use crate::Outcome;

impl<T> Outcome<T> {
    /// Transforms the success value, propagating a failure untouched.
    ///
    /// A failure passes through at the new value type without invoking
    /// `mapper`. A panic raised by `mapper` is captured and converted into
    /// a failure carrying the panic's message text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let doubled = Outcome::success(5).map(|n| n * 2);
    /// assert_eq!(doubled, Outcome::success(10));
    ///
    /// let skipped = Outcome::<i32>::failure("Original error").map(|n| n * 2);
    /// assert_eq!(skipped, Outcome::failure("Original error"));
    ///
    /// let faulted = Outcome::success(5).map(|_| -> i32 { panic!("Mapper failed") });
    /// assert_eq!(faulted, Outcome::failure("Mapper failed"));
    /// ```
    #[must_use]
    pub fn map<R>(self, mapper: impl FnOnce(T) -> R) -> Outcome<R> {
        match self {
            Self::Success(value) => match capture(move || mapper(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(fault) => Outcome::Failure(fault),
            },
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Folds both states through a handler, normalizing toward success.
    ///
    /// The matching handler's normal return becomes a `Success` even when
    /// the input was a failure; only a panic inside the invoked handler
    /// yields a `Failure`, carrying the panic's message text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let recovered = Outcome::<usize>::failure("Error occurred")
    ///     .match_with(|n| n * 2, |err| err.len());
    /// assert_eq!(recovered, Outcome::success(14));
    ///
    /// let doubled = Outcome::<usize>::success(5).match_with(|n| n * 2, |err| err.len());
    /// assert_eq!(doubled, Outcome::success(10));
    /// ```
    #[must_use]
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(String) -> R,
    ) -> Outcome<R> {
        let handled = match self {
            Self::Success(value) => capture(move || on_success(value)),
            Self::Failure(message) => capture(move || on_failure(message)),
        };
        match handled {
            Ok(value) => Outcome::Success(value),
            Err(fault) => Outcome::Failure(fault),
        }
    }
}

/// Maps an optionally-present outcome, panicking when it is absent.
///
/// Equivalent to [`Outcome::map`] once the outcome is known to exist.
/// Absence is a programming error in the caller, distinct from a
/// computation failure, so it is never converted into a `Failure`.
///
/// # Panics
///
/// Panics when `outcome` is [`None`], regardless of `mapper`.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, combinator};
///
/// let doubled = combinator::map(Some(Outcome::success(5)), |n| n * 2);
/// assert_eq!(doubled, Outcome::success(10));
/// ```
#[must_use]
#[track_caller]
pub fn map<T, R>(outcome: Option<Outcome<T>>, mapper: impl FnOnce(T) -> R) -> Outcome<R> {
    require_outcome(outcome, "map").map(mapper)
}

/// Matches an optionally-present outcome, panicking when it is absent.
///
/// Equivalent to [`Outcome::match_with`] once the outcome is known to
/// exist; the same caller-contract rule as [`map`] applies.
///
/// # Panics
///
/// Panics when `outcome` is [`None`], regardless of the handlers.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, combinator};
///
/// let recovered = combinator::match_with(
///     Some(Outcome::<usize>::failure("Error occurred")),
///     |n| n * 2,
///     |err| err.len(),
/// );
/// assert_eq!(recovered, Outcome::success(14));
/// ```
#[must_use]
#[track_caller]
pub fn match_with<T, R>(
    outcome: Option<Outcome<T>>,
    on_success: impl FnOnce(T) -> R,
    on_failure: impl FnOnce(String) -> R,
) -> Outcome<R> {
    require_outcome(outcome, "match_with").match_with(on_success, on_failure)
}

#[track_caller]
fn require_outcome<T>(outcome: Option<Outcome<T>>, combinator: &'static str) -> Outcome<T> {
    outcome.unwrap_or_else(|| panic!("{combinator} requires an outcome; the caller supplied none"))
}
