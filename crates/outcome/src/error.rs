//! Invariant violations raised by the outcome constructors.

use thiserror::Error;

/// Message used by [`crate::ensure`] when the caller supplies none.
pub const DEFAULT_EMPTY_MESSAGE: &str = "expected at least one element";

/// A caller tried to build a non-empty collection from zero elements.
///
/// This is a programmer error, not a domain failure. Nothing in this
/// workspace recovers from it; it is surfaced so the caller can fail fast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    message: String,
}

impl InvariantViolation {
    /// Create a violation carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied at construction.
    pub fn message(&self) -> &str {
        &self.message
    }
}
