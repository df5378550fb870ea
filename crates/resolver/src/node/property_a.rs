//! Branch A: one child, cached per instance.

use async_trait::async_trait;
use futures::StreamExt;
use tessera_outcome::Outcome;

use crate::cache::CacheSlot;
use crate::node::PropC;
use crate::property::{PropertyA, PropertyAError, PropertyC};
use crate::resolve::Resolve;
use crate::stream::OutcomeStream;

/// Resolves its child and embeds the child's value as `property_c`.
///
/// A failing child is passed through as-is (errors widened to
/// [`PropertyAError`], warnings untouched). The child is created on first
/// access and kept for the lifetime of this instance.
#[derive(Debug)]
pub struct PropA<C = PropC> {
    property_c: CacheSlot<C>,
}

impl<C> PropA<C> {
    /// Create a node whose child does not exist yet.
    pub const fn new() -> Self {
        Self {
            property_c: CacheSlot::instance("prop_a.property_c"),
        }
    }
}

impl<C> Default for PropA<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Default> PropA<C> {
    /// The child resolver, created on first access.
    pub fn property_c(&self) -> &C {
        self.property_c.get_or_init(C::default)
    }
}

fn embed<E, W>(child: Outcome<PropertyC, E, W>) -> Outcome<PropertyA, PropertyAError, W>
where
    E: Into<PropertyAError>,
{
    child
        .widen::<PropertyAError, W>()
        .map(|property_c| PropertyA { property_c })
}

#[async_trait]
impl<C> Resolve for PropA<C>
where
    C: Resolve<Value = PropertyC> + Default,
    C::Error: Into<PropertyAError>,
{
    type Value = PropertyA;
    type Error = PropertyAError;
    type Warning = C::Warning;

    #[tracing::instrument(level = "trace", name = "prop_a.resolve", skip_all)]
    async fn resolve(&self) -> Outcome<PropertyA, PropertyAError, C::Warning> {
        embed(self.property_c().resolve().await)
    }

    fn resolve_stream(&self) -> OutcomeStream<PropertyA, PropertyAError, C::Warning> {
        self.property_c().resolve_stream().map(embed).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Fails;
    use crate::property::ErrorC;
    use futures::FutureExt;
    use pretty_assertions::assert_eq;
    use tessera_outcome::NonEmpty;

    #[test]
    fn wraps_child_value() {
        let outcome = PropA::<PropC>::new().resolve().now_or_never().unwrap();
        assert_eq!(
            outcome,
            Outcome::success(PropertyA {
                property_c: PropertyC {}
            })
        );
    }

    #[test]
    fn propagates_child_failure() {
        let node = PropA::<Fails<PropertyC, ErrorC>>::new();
        let outcome = node.resolve().now_or_never().unwrap();
        assert_eq!(outcome.errors(), Some(&NonEmpty::new(PropertyAError::C(ErrorC))));
    }

    #[test]
    fn child_is_created_lazily() {
        let node = PropA::<PropC>::new();
        assert!(!node.property_c.is_populated());
        let _ = node.property_c();
        assert!(node.property_c.is_populated());
    }
}
