//! Branch B: one child, shared by every `PropB`.

use async_trait::async_trait;
use futures::StreamExt;
use tessera_outcome::{Never, Outcome};

use crate::cache::CacheSlot;
use crate::node::PropD;
use crate::property::{ErrorD, PropertyB, PropertyBError, PropertyD};
use crate::resolve::Resolve;
use crate::stream::OutcomeStream;

/// Resolves the shared [`PropD`] and embeds its value as `property_d`.
///
/// Unlike [`crate::node::PropA`], the child is cached per type: the first
/// `PropB` to ask creates it, and every `PropB` afterwards gets the same
/// instance until the process exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropB {
    _private: (),
}

impl PropB {
    /// Create a node. The shared child may already exist.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn shared_property_d() -> &'static CacheSlot<PropD> {
        static PROPERTY_D: CacheSlot<PropD> = CacheSlot::shared("prop_b.property_d");
        &PROPERTY_D
    }

    /// The child resolver shared by all `PropB` instances.
    pub fn property_d(&self) -> &'static PropD {
        Self::shared_property_d().get_or_init(PropD::new)
    }
}

fn embed(child: Outcome<PropertyD, ErrorD>) -> Outcome<PropertyB, PropertyBError> {
    child
        .widen::<PropertyBError, Never>()
        .map(|property_d| PropertyB { property_d })
}

#[async_trait]
impl Resolve for PropB {
    type Value = PropertyB;
    type Error = PropertyBError;
    type Warning = Never;

    #[tracing::instrument(level = "trace", name = "prop_b.resolve", skip_all)]
    async fn resolve(&self) -> Outcome<PropertyB, PropertyBError> {
        embed(self.property_d().resolve().await)
    }

    fn resolve_stream(&self) -> OutcomeStream<PropertyB, PropertyBError, Never> {
        self.property_d().resolve_stream().map(embed).boxed()
    }
}
