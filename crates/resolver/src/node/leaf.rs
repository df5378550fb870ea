//! Childless resolvers with a fixed outcome.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use tessera_outcome::{Never, Outcome};

use crate::property::{ErrorC, ErrorD, PropertyC, PropertyD};
use crate::resolve::Resolve;
use crate::stream::{self, OutcomeStream};

/// Always succeeds with `V::default()`.
pub struct Succeeds<V, E, W = Never> {
    _kinds: PhantomData<fn() -> (V, E, W)>,
}

/// Always fails with `E::default()`.
pub struct Fails<V, E, W = Never> {
    _kinds: PhantomData<fn() -> (V, E, W)>,
}

/// Branch A's leaf: always resolves to `PropertyC {}`.
pub type PropC = Succeeds<PropertyC, ErrorC>;

/// Branch B's leaf: always fails with [`ErrorD`].
pub type PropD = Fails<PropertyD, ErrorD>;

macro_rules! leaf_common {
    ($leaf:ident) => {
        impl<V, E, W> $leaf<V, E, W> {
            /// Create the leaf.
            pub const fn new() -> Self {
                Self {
                    _kinds: PhantomData,
                }
            }
        }

        impl<V, E, W> Default for $leaf<V, E, W> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<V, E, W> fmt::Debug for $leaf<V, E, W> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($leaf))
            }
        }
    };
}

leaf_common!(Succeeds);
leaf_common!(Fails);

#[async_trait]
impl<V, E, W> Resolve for Succeeds<V, E, W>
where
    V: Default + Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
    W: Clone + Send + Sync + 'static,
{
    type Value = V;
    type Error = E;
    type Warning = W;

    async fn resolve(&self) -> Outcome<V, E, W> {
        Outcome::success(V::default())
    }

    fn resolve_stream(&self) -> OutcomeStream<V, E, W> {
        stream::once(Outcome::success(V::default()))
    }
}

#[async_trait]
impl<V, E, W> Resolve for Fails<V, E, W>
where
    V: Clone + Send + Sync + 'static,
    E: Default + Clone + Send + Sync + 'static,
    W: Clone + Send + Sync + 'static,
{
    type Value = V;
    type Error = E;
    type Warning = W;

    async fn resolve(&self) -> Outcome<V, E, W> {
        Outcome::failure(E::default())
    }

    fn resolve_stream(&self) -> OutcomeStream<V, E, W> {
        stream::once(Outcome::failure(E::default()))
    }
}
