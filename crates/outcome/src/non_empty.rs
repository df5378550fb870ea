//! Sequences that always hold at least one element.
//!
//! [`NonEmpty`] stores its first element separately from the rest, so an
//! empty value cannot be represented at all. The helpers here are the only
//! bridges from ordinary (possibly empty) collections:
//!
//! | Helper | Empty input |
//! |---|---|
//! | [`make`] | not possible, head is explicit |
//! | [`try_from_vec`] | `None` |
//! | [`ensure`] | `Err(InvariantViolation)` |

pub use nonempty::{NonEmpty, nonempty};

use crate::error::{DEFAULT_EMPTY_MESSAGE, InvariantViolation};

/// Returns `true` when `items` holds at least one element.
pub fn is_non_empty<T>(items: &[T]) -> bool {
    !items.is_empty()
}

/// Build a sequence from an explicit head and any number of trailing elements.
pub fn make<T>(head: T, tail: impl IntoIterator<Item = T>) -> NonEmpty<T> {
    NonEmpty {
        head,
        tail: tail.into_iter().collect(),
    }
}

/// Reinterpret `items` as non-empty, or `None` when it is empty.
pub fn try_from_vec<T>(items: Vec<T>) -> Option<NonEmpty<T>> {
    NonEmpty::from_vec(items)
}

/// Like [`try_from_vec`], but an empty input is an [`InvariantViolation`]
/// carrying `message` (or [`DEFAULT_EMPTY_MESSAGE`]).
pub fn ensure<T>(items: Vec<T>, message: Option<&str>) -> Result<NonEmpty<T>, InvariantViolation> {
    try_from_vec(items)
        .ok_or_else(|| InvariantViolation::new(message.unwrap_or(DEFAULT_EMPTY_MESSAGE)))
}

/// Collapse an arbitrary collection to `None` when it has no elements.
///
/// Used wherever "no warnings" and "an empty warning list" must mean the
/// same thing.
pub(crate) fn collapse<T>(items: impl IntoIterator<Item = T>) -> Option<NonEmpty<T>> {
    try_from_vec(items.into_iter().collect())
}
