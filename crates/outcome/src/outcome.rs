//! The two-variant result container.

use std::fmt;

use crate::error::InvariantViolation;
use crate::non_empty::{NonEmpty, collapse, ensure};

/// Message carried by [`Outcome::try_err`] when handed an empty error list.
pub const EMPTY_ERRORS_MESSAGE: &str = "err requires at least one error";

/// Either a value or at least one error, plus optional warnings.
///
/// Warnings never prevent success. When present they are non-empty:
/// constructors collapse an empty warning collection to `None`, so there is
/// exactly one way to say "no warnings". A failure with zero errors cannot be
/// built.
///
/// `W` defaults to [`Never`] for outcomes that can never carry warnings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<V, E, W = Never> {
    /// The value was produced.
    Success {
        /// The value we are interested in.
        value: V,
        /// Problems noticed while producing the value.
        warnings: Option<NonEmpty<W>>,
    },
    /// The value could not be produced.
    Failure {
        /// Everything that went wrong.
        errors: NonEmpty<E>,
        /// Problems noticed before failing.
        warnings: Option<NonEmpty<W>>,
    },
}

/// Uninhabited kind for outcomes that never carry warnings (or errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Never {}

impl fmt::Display for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

/// One error or many, accepted by [`Outcome::err`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors<E>(NonEmpty<E>);

impl<E> Errors<E> {
    /// Unwrap into the underlying sequence.
    pub fn into_inner(self) -> NonEmpty<E> {
        self.0
    }
}

impl<E> From<E> for Errors<E> {
    fn from(error: E) -> Self {
        Self(NonEmpty::new(error))
    }
}

impl<E> From<NonEmpty<E>> for Errors<E> {
    fn from(errors: NonEmpty<E>) -> Self {
        Self(errors)
    }
}

impl<V, E, W> Outcome<V, E, W> {
    /// A success. An empty `warnings` collection means no warnings.
    pub fn ok(value: V, warnings: impl IntoIterator<Item = W>) -> Self {
        Self::Success {
            value,
            warnings: collapse(warnings),
        }
    }

    /// A success without warnings.
    pub fn success(value: V) -> Self {
        Self::Success {
            value,
            warnings: None,
        }
    }

    /// A failure from a single error or a [`NonEmpty`] of errors.
    ///
    /// A single error is wrapped into a one-element sequence.
    pub fn err(errors: impl Into<Errors<E>>, warnings: impl IntoIterator<Item = W>) -> Self {
        Self::Failure {
            errors: errors.into().into_inner(),
            warnings: collapse(warnings),
        }
    }

    /// A failure with one error and no warnings.
    pub fn failure(error: E) -> Self {
        Self::Failure {
            errors: NonEmpty::new(error),
            warnings: None,
        }
    }

    /// A failure from a plain list of errors.
    ///
    /// An empty list cannot describe a failure and is rejected with an
    /// [`InvariantViolation`].
    pub fn try_err(
        errors: Vec<E>,
        warnings: impl IntoIterator<Item = W>,
    ) -> Result<Self, InvariantViolation> {
        let errors = ensure(errors, Some(EMPTY_ERRORS_MESSAGE))?;
        Ok(Self::err(errors, warnings))
    }

    /// Returns `true` for [`Outcome::Success`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` for [`Outcome::Failure`].
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// The error sequence, if this is a failure.
    pub fn errors(&self) -> Option<&NonEmpty<E>> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { errors, .. } => Some(errors),
        }
    }

    /// Warnings attached to either variant.
    pub fn warnings(&self) -> Option<&NonEmpty<W>> {
        match self {
            Self::Success { warnings, .. } | Self::Failure { warnings, .. } => warnings.as_ref(),
        }
    }

    /// Consume the outcome, keeping only the success value.
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    /// Transform the success value; failures and all warnings pass through.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U, E, W> {
        match self {
            Self::Success { value, warnings } => Outcome::Success {
                value: f(value),
                warnings,
            },
            Self::Failure { errors, warnings } => Outcome::Failure { errors, warnings },
        }
    }

    /// Convert error and warning kinds into wider ones, element by element.
    ///
    /// The variant, the order and the count of every sequence are unchanged.
    pub fn widen<E2, W2>(self) -> Outcome<V, E2, W2>
    where
        E: Into<E2>,
        W: Into<W2>,
    {
        match self {
            Self::Success { value, warnings } => Outcome::Success {
                value,
                warnings: warnings.map(|w| w.map(Into::into)),
            },
            Self::Failure { errors, warnings } => Outcome::Failure {
                errors: errors.map(Into::into),
                warnings: warnings.map(|w| w.map(Into::into)),
            },
        }
    }

    /// Reclassify a failure's errors as warnings of another kind.
    ///
    /// Returns `None` for a success. The failure's own warnings are not
    /// included.
    pub fn errors_as_warnings<W2>(self) -> Option<NonEmpty<W2>>
    where
        E: Into<W2>,
    {
        match self {
            Self::Success { .. } => None,
            Self::Failure { errors, .. } => Some(errors.map(Into::into)),
        }
    }

    /// Split into a standard [`Result`] so callers can use `?`.
    #[allow(clippy::type_complexity)]
    pub fn into_result(
        self,
    ) -> Result<(V, Option<NonEmpty<W>>), (NonEmpty<E>, Option<NonEmpty<W>>)> {
        match self {
            Self::Success { value, warnings } => Ok((value, warnings)),
            Self::Failure { errors, warnings } => Err((errors, warnings)),
        }
    }
}

impl<V, E, W> fmt::Display for Outcome<V, E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warnings = self.warnings().map_or(0, NonEmpty::len);
        match self {
            Self::Success { .. } => write!(f, "ok ({warnings} warnings)"),
            Self::Failure { errors, .. } => {
                write!(f, "err ({} errors, {warnings} warnings)", errors.len())
            }
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{Never, Outcome};
    use crate::non_empty::NonEmpty;

    impl Serialize for Never {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            match *self {}
        }
    }

    struct Seq<'a, T>(&'a NonEmpty<T>);

    impl<T: Serialize> Serialize for Seq<'_, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.0.iter())
        }
    }

    /// `{"_tag": "ok", "result": .., "warnings": [..]}` or
    /// `{"_tag": "err", "errors": [..], "warnings": [..]}`; `warnings` is
    /// omitted when absent.
    impl<V: Serialize, E: Serialize, W: Serialize> Serialize for Outcome<V, E, W> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Outcome", 3)?;
            match self {
                Self::Success { value, .. } => {
                    state.serialize_field("_tag", "ok")?;
                    state.serialize_field("result", value)?;
                }
                Self::Failure { errors, .. } => {
                    state.serialize_field("_tag", "err")?;
                    state.serialize_field("errors", &Seq(errors))?;
                }
            }
            match self.warnings() {
                Some(warnings) => state.serialize_field("warnings", &Seq(warnings))?,
                None => state.skip_field("warnings")?,
            }
            state.end()
        }
    }
}
