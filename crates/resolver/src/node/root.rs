//! The root: two branches, one fatal and one optional.

use async_trait::async_trait;
use futures::StreamExt;
use tessera_outcome::Outcome;

use crate::cache::CacheSlot;
use crate::node::{PropA, PropB};
use crate::property::{PropertyA, PropertyB, Root, RootError, RootWarning};
use crate::resolve::Resolve;
use crate::stream::{OutcomeStream, combine_latest};

type RootOutcome = Outcome<Root, RootError, RootWarning>;

/// Combines branch A (required) with branch B (optional).
///
/// | A | B | Result |
/// |---|---|---|
/// | failure | not consulted | A's failure, widened |
/// | success | failure | success without `property_b`, B's errors as warnings |
/// | success | success | success with both values, no warnings |
///
/// Warnings produced by A or B themselves are not carried into a successful
/// root outcome. Both children are cached per instance.
#[derive(Debug)]
pub struct PropRoot<A = PropA, B = PropB> {
    property_a: CacheSlot<A>,
    property_b: CacheSlot<B>,
}

impl<A, B> PropRoot<A, B> {
    /// Create a root whose children do not exist yet.
    pub const fn new() -> Self {
        Self {
            property_a: CacheSlot::instance("prop_root.property_a"),
            property_b: CacheSlot::instance("prop_root.property_b"),
        }
    }
}

impl<A, B> Default for PropRoot<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Default, B> PropRoot<A, B> {
    /// Branch A's resolver, created on first access.
    pub fn property_a(&self) -> &A {
        self.property_a.get_or_init(A::default)
    }
}

impl<A, B: Default> PropRoot<A, B> {
    /// Branch B's resolver, created on first access.
    pub fn property_b(&self) -> &B {
        self.property_b.get_or_init(B::default)
    }
}

/// Split off branch A's value, or turn its failure into the root's.
fn require_a<E, W>(a: Outcome<PropertyA, E, W>) -> Result<PropertyA, RootOutcome>
where
    E: Into<RootError>,
    W: Into<RootWarning>,
{
    match a {
        Outcome::Success { value, .. } => Ok(value),
        Outcome::Failure { errors, warnings } => Err(Outcome::Failure {
            errors: errors.map(Into::into),
            warnings: warnings.map(|w| w.map(Into::into)),
        }),
    }
}

/// Attach branch B to an already resolved A, degrading B's failure.
fn attach_b<E, W>(property_a: PropertyA, b: Outcome<PropertyB, E, W>) -> RootOutcome
where
    E: Into<RootWarning>,
{
    match b {
        Outcome::Success { value, .. } => Outcome::success(Root {
            property_a,
            property_b: Some(value),
        }),
        failed => {
            let warnings = failed.errors_as_warnings();
            tracing::debug!(
                warnings = warnings.as_ref().map_or(0, |w| w.len()),
                "branch b failed, degrading to warnings"
            );
            Outcome::Success {
                value: Root {
                    property_a,
                    property_b: None,
                },
                warnings,
            }
        }
    }
}

#[async_trait]
impl<A, B> Resolve for PropRoot<A, B>
where
    A: Resolve<Value = PropertyA> + Default,
    A::Error: Into<RootError>,
    A::Warning: Into<RootWarning>,
    B: Resolve<Value = PropertyB> + Default,
    B::Error: Into<RootWarning>,
{
    type Value = Root;
    type Error = RootError;
    type Warning = RootWarning;

    #[tracing::instrument(level = "trace", name = "prop_root.resolve", skip_all)]
    async fn resolve(&self) -> RootOutcome {
        let property_a = match require_a(self.property_a().resolve().await) {
            Ok(value) => value,
            Err(failed) => return failed,
        };
        attach_b(property_a, self.property_b().resolve().await)
    }

    fn resolve_stream(&self) -> OutcomeStream<Root, RootError, RootWarning> {
        combine_latest(
            self.property_a().resolve_stream(),
            self.property_b().resolve_stream(),
        )
        .map(|(a, b)| match require_a(a) {
            Ok(property_a) => attach_b(property_a, b),
            Err(failed) => failed,
        })
        .boxed()
    }
}
