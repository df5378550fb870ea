//! Value shapes and domain errors resolved by the built-in nodes.
//!
//! Errors are payload-free markers told apart only by type. Nodes that can
//! fail in more than one way use a union enum, and every narrower kind
//! converts into the wider ones through `From`.

use serde::{Serialize, Serializer};
use tessera_outcome::Never;
use thiserror::Error;

/// Leaf value produced by the branch-A leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyC {}

/// Leaf value the branch-B leaf would produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyD {}

/// Branch A: wraps its resolved child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyA {
    /// The resolved child value.
    pub property_c: PropertyC,
}

/// Branch B: wraps its resolved child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyB {
    /// The resolved child value.
    pub property_d: PropertyD,
}

/// The root value.
///
/// `property_b` is `None` when branch B failed and was degraded to warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    /// Branch A's value; always present on success.
    pub property_a: PropertyA,
    /// Branch B's value, if branch B succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_b: Option<PropertyB>,
}

macro_rules! domain_errors {
    ($($(#[$meta:meta])* $name:ident => $message:literal;)+) => {$(
        $(#[$meta])*
        #[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[error($message)]
        pub struct $name;

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(stringify!($name))
            }
        }
    )+};
}

domain_errors! {
    /// Branch A's own failure.
    ErrorA => "property A failed to resolve";
    /// Branch B's own failure.
    ErrorB => "property B failed to resolve";
    /// Failure of branch A's leaf.
    ErrorC => "property C failed to resolve";
    /// Failure of branch B's leaf.
    ErrorD => "property D failed to resolve";
}

/// Anything that can fail branch A.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyAError {
    /// See [`ErrorA`].
    #[error(transparent)]
    A(#[from] ErrorA),
    /// See [`ErrorC`].
    #[error(transparent)]
    C(#[from] ErrorC),
}

/// Anything that can fail branch B.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyBError {
    /// See [`ErrorB`].
    #[error(transparent)]
    B(#[from] ErrorB),
    /// See [`ErrorD`].
    #[error(transparent)]
    D(#[from] ErrorD),
}

/// Anything that can fail the root.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootError {
    /// See [`ErrorA`].
    #[error(transparent)]
    A(#[from] ErrorA),
    /// See [`ErrorB`].
    #[error(transparent)]
    B(#[from] ErrorB),
    /// See [`ErrorC`].
    #[error(transparent)]
    C(#[from] ErrorC),
    /// See [`ErrorD`].
    #[error(transparent)]
    D(#[from] ErrorD),
}

/// Warnings on the root are branch B's errors, reclassified.
pub type RootWarning = PropertyBError;

impl From<PropertyAError> for RootError {
    fn from(error: PropertyAError) -> Self {
        match error {
            PropertyAError::A(e) => Self::A(e),
            PropertyAError::C(e) => Self::C(e),
        }
    }
}

impl From<PropertyBError> for RootError {
    fn from(error: PropertyBError) -> Self {
        match error {
            PropertyBError::B(e) => Self::B(e),
            PropertyBError::D(e) => Self::D(e),
        }
    }
}

impl From<Never> for PropertyBError {
    fn from(never: Never) -> Self {
        match never {}
    }
}

impl Serialize for PropertyAError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::A(e) => e.serialize(serializer),
            Self::C(e) => e.serialize(serializer),
        }
    }
}

impl Serialize for PropertyBError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::B(e) => e.serialize(serializer),
            Self::D(e) => e.serialize(serializer),
        }
    }
}

impl Serialize for RootError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::A(e) => e.serialize(serializer),
            Self::B(e) => e.serialize(serializer),
            Self::C(e) => e.serialize(serializer),
            Self::D(e) => e.serialize(serializer),
        }
    }
}
