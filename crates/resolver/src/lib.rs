//! # Tessera Resolver
//!
//! Small, hand-built trees of resolvers. Each node computes an
//! [`Outcome`](tessera_outcome::Outcome) either once ([`Resolve::resolve`]) or
//! continuously ([`Resolve::resolve_stream`]), lazily creating and caching its
//! child resolvers on first access.
//!
//! ```rust
//! use futures::FutureExt;
//! use tessera_resolver::prelude::*;
//!
//! let root = PropRoot::<PropA, PropB>::new();
//! let outcome = root.resolve().now_or_never().unwrap();
//!
//! // Branch B always fails, which the root degrades to a warning.
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.warnings().map(|w| w.len()), Some(1));
//! ```
//!
//! Children are cached at one of two scopes (see [`cache`]):
//! `PropRoot` and `PropA` own their children, while every `PropB` shares a
//! single `PropD`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod cache;
pub mod node;
pub mod property;
pub mod resolve;
pub mod stream;

pub use cache::{CacheSlot, SlotScope};
pub use resolve::{Resolve, ResolveOutcome};
pub use stream::{CombineLatest, OutcomeStream, combine_latest};

/// Prelude for common imports
pub mod prelude {
    pub use crate::node::{Fails, PropA, PropB, PropC, PropD, PropRoot, Succeeds};
    pub use crate::property::{
        ErrorA, ErrorB, ErrorC, ErrorD, PropertyA, PropertyAError, PropertyB, PropertyBError,
        PropertyC, PropertyD, Root, RootError, RootWarning,
    };
    pub use crate::{OutcomeStream, Resolve, ResolveOutcome};
    pub use tessera_outcome::{NonEmpty, Never, Outcome};
}
