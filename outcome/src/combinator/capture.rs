//! Fault-capture boundary for user-supplied transformation functions.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Message used when a panic payload carries no text to report.
pub(crate) const OPAQUE_FAULT: &str = "transformation raised a non-string fault";

/// Runs `f`, converting a panic into its message text.
///
/// The closure and everything it captured are consumed whether or not it
/// faults, so no partially-updated state is observable afterwards; the
/// `AssertUnwindSafe` below relies on that.
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> Result<R, String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(raised) => {
            let message = fault_message(raised);
            tracing::debug!(fault = %message, "captured fault from transformation");
            Err(message)
        }
    }
}

/// Renders a panic payload as text.
///
/// `panic!` with format arguments produces a `String` payload and a bare
/// literal produces a `&'static str`; anything else (a `panic_any` value)
/// has no message to extract and maps to [`OPAQUE_FAULT`].
fn fault_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(other) => other
            .downcast::<&'static str>()
            .map_or_else(|_| OPAQUE_FAULT.to_owned(), |message| (*message).to_owned()),
    }
}
