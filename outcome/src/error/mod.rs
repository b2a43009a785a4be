//! Error type and `Result` interop for leaving and entering the outcome world.

mod conversions;
mod types;

pub use types::OutcomeError;
