//! Discriminated computation outcomes and the combinators that chain them.
//!
//! An [`Outcome`] represents a concluded computation: either `Success`
//! holding the computed value, or `Failure` holding a human-readable
//! message. The [`map`](Outcome::map) and
//! [`match_with`](Outcome::match_with) combinators chain further
//! transformations without branching at every call site, and together they
//! form the crate's fault boundary: a panic raised inside a user-supplied
//! transformation is captured and converted into an ordinary `Failure`, so
//! a chain of combinators always terminates in a well-formed outcome.
//!
//! ```rust
//! use outcome::Outcome;
//!
//! let doubled = Outcome::success(5).map(|n| n * 2);
//! assert_eq!(doubled, Outcome::success(10));
//!
//! let recovered = Outcome::<usize>::failure("Error occurred")
//!     .match_with(|n| n * 2, |err| err.len());
//! assert_eq!(recovered, Outcome::success(14));
//! ```
//!
//! [`OutcomeError`] and the [`Result`] conversions let callers cross
//! between the outcome world and std-style fallible code with `?`.

pub mod combinator;
mod container;
mod error;

pub use container::Outcome;
pub use error::OutcomeError;
