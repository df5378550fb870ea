//! The resolver contract.

use async_trait::async_trait;
use tessera_outcome::Outcome;

use crate::stream::OutcomeStream;

/// A node that can produce an [`Outcome`] once, or continuously.
///
/// Resolvers never store resolved values: each call re-runs the node's
/// combination logic against fresh child results. Only child *resolvers* are
/// cached (see [`crate::cache`]).
#[async_trait]
pub trait Resolve: Send + Sync {
    /// The value produced on success.
    type Value: Clone + Send + Sync + 'static;
    /// Domain error kind carried by a failure.
    type Error: Clone + Send + Sync + 'static;
    /// Warning kind attached to either variant.
    type Warning: Clone + Send + Sync + 'static;

    /// Resolve once.
    ///
    /// There is no way to cancel this short of dropping the future; once
    /// awaited it runs to completion and always yields an outcome.
    async fn resolve(&self) -> Outcome<Self::Value, Self::Error, Self::Warning>;

    /// Subscribe to a stream of outcomes.
    ///
    /// Each call returns an independent subscription. Drop it to
    /// unsubscribe.
    fn resolve_stream(&self) -> OutcomeStream<Self::Value, Self::Error, Self::Warning>;
}

/// The outcome type a resolver produces.
pub type ResolveOutcome<R> =
    Outcome<<R as Resolve>::Value, <R as Resolve>::Error, <R as Resolve>::Warning>;
