//! Push-based resolution: emission, completion and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use futures::stream::{self, StreamExt};
use pretty_assertions::assert_eq;
use tessera_resolver::prelude::*;
use tessera_resolver::{OutcomeStream, combine_latest};

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// Branch A that emits a success every time it is polled and never ends.
#[derive(Default)]
struct TickingA;

#[async_trait]
impl Resolve for TickingA {
    type Value = PropertyA;
    type Error = PropertyAError;
    type Warning = Never;

    async fn resolve(&self) -> Outcome<PropertyA, PropertyAError> {
        Outcome::success(PropertyA::default())
    }

    fn resolve_stream(&self) -> OutcomeStream<PropertyA, PropertyAError, Never> {
        stream::repeat_with(|| Outcome::success(PropertyA::default())).boxed()
    }
}

/// Branch B that alternates between failure and success, then stays open.
#[derive(Default)]
struct FlickeringB;

#[async_trait]
impl Resolve for FlickeringB {
    type Value = PropertyB;
    type Error = PropertyBError;
    type Warning = Never;

    async fn resolve(&self) -> Outcome<PropertyB, PropertyBError> {
        Outcome::failure(PropertyBError::D(ErrorD))
    }

    fn resolve_stream(&self) -> OutcomeStream<PropertyB, PropertyBError, Never> {
        stream::iter([
            Outcome::failure(PropertyBError::D(ErrorD)),
            Outcome::success(PropertyB::default()),
            Outcome::failure(PropertyBError::B(ErrorB)),
        ])
        .chain(stream::pending())
        .boxed()
    }
}

/// Branch B that never emits.
#[derive(Default)]
struct SilentB;

#[async_trait]
impl Resolve for SilentB {
    type Value = PropertyB;
    type Error = PropertyBError;
    type Warning = Never;

    async fn resolve(&self) -> Outcome<PropertyB, PropertyBError> {
        Outcome::success(PropertyB::default())
    }

    fn resolve_stream(&self) -> OutcomeStream<PropertyB, PropertyBError, Never> {
        stream::pending().boxed()
    }
}

/// Branch B whose only emission waits on a timer.
#[derive(Default)]
struct LateB;

#[async_trait]
impl Resolve for LateB {
    type Value = PropertyB;
    type Error = PropertyBError;
    type Warning = Never;

    async fn resolve(&self) -> Outcome<PropertyB, PropertyBError> {
        Outcome::success(PropertyB::default())
    }

    fn resolve_stream(&self) -> OutcomeStream<PropertyB, PropertyBError, Never> {
        stream::once(async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Outcome::success(PropertyB::default())
        })
        .boxed()
    }
}

/// Sets a flag when dropped, so tests can observe upstream release.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Leaf C whose streams never end and report when they are dropped.
#[derive(Default)]
struct GuardedC {
    released: Arc<AtomicBool>,
    subscriptions: AtomicUsize,
}

#[async_trait]
impl Resolve for GuardedC {
    type Value = PropertyC;
    type Error = ErrorC;
    type Warning = Never;

    async fn resolve(&self) -> Outcome<PropertyC, ErrorC> {
        Outcome::success(PropertyC {})
    }

    fn resolve_stream(&self) -> OutcomeStream<PropertyC, ErrorC, Never> {
        self.subscriptions.fetch_add(1, Ordering::SeqCst);
        let guard = DropFlag(Arc::clone(&self.released));
        stream::unfold(guard, |guard| async move {
            Some((Outcome::success(PropertyC {}), guard))
        })
        .boxed()
    }
}

// ---------------------------------------------------------------------------
// Leaves and built-in tree
// ---------------------------------------------------------------------------

#[tokio::test]
async fn leaf_streams_emit_exactly_once() {
    let c: Vec<_> = PropC::new().resolve_stream().collect().await;
    assert_eq!(c, vec![Outcome::success(PropertyC {})]);

    let d: Vec<_> = PropD::new().resolve_stream().collect().await;
    assert_eq!(d, vec![Outcome::failure(ErrorD)]);
}

#[tokio::test]
async fn built_in_root_stream_emits_degraded_root_then_completes() {
    let root = PropRoot::<PropA, PropB>::new();
    let items: Vec<_> = root.resolve_stream().collect().await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0], root.resolve().await);
}

#[tokio::test]
async fn first_emission_matches_one_shot_resolution() {
    let root = PropRoot::<PropA, PropB>::new();
    let first = root.resolve_stream().next().await;
    assert_eq!(first, Some(root.resolve().await));
}

// ---------------------------------------------------------------------------
// Live branches
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ticking_branches_keep_emitting() {
    let _log = tessera_log::init_test();
    let root = PropRoot::<TickingA, FlickeringB>::new();
    let items: Vec<_> = root.resolve_stream().take(5).collect().await;

    assert_eq!(items.len(), 5);
    for item in &items {
        let value = item.value().expect("branch a never fails");
        assert_eq!(value.property_a, PropertyA::default());
        match value.property_b {
            Some(_) => assert!(item.warnings().is_none()),
            None => assert_eq!(item.warnings().map(|w| w.len()), Some(1)),
        }
    }
}

#[test]
fn ticking_branch_a_yields_until_branch_b_emits() {
    let root = PropRoot::<TickingA, SilentB>::new();
    let mut live = root.resolve_stream();
    assert!(live.next().now_or_never().is_none());
    assert!(live.next().now_or_never().is_none());
}

#[tokio::test]
async fn ticking_branch_a_lets_late_branch_b_arrive() {
    let root = PropRoot::<TickingA, LateB>::new();
    let mut live = root.resolve_stream();

    let first = tokio::time::timeout(Duration::from_secs(5), live.next())
        .await
        .expect("branch b's timer must get a chance to fire")
        .expect("stream stays open");
    let value = first.value().expect("both branches succeed");
    assert_eq!(value.property_b, Some(PropertyB::default()));
    assert!(first.warnings().is_none());
}

#[tokio::test]
async fn branch_b_updates_switch_between_degraded_and_full() {
    let a = stream::iter([Outcome::<PropertyA, PropertyAError>::success(PropertyA::default())]);
    let b = FlickeringB.resolve_stream();

    let mut combined = combine_latest(a, b);
    let mut seen = Vec::new();
    for _ in 0..3 {
        let (_, b) = combined.next().await.expect("three b updates");
        seen.push(b.is_ok());
    }
    assert_eq!(seen, vec![false, true, false]);
}

#[tokio::test]
async fn open_branch_keeps_root_stream_open() {
    let root = PropRoot::<PropA, FlickeringB>::new();
    let mut live = root.resolve_stream();

    for _ in 0..3 {
        assert!(live.next().await.is_some());
    }
    let next = tokio::time::timeout(Duration::from_millis(50), live.next()).await;
    assert!(next.is_err(), "stream must stay open while branch b is open");
}

#[tokio::test]
async fn combined_stream_ends_after_both_sides_end() {
    let a = stream::iter([1, 2, 3]);
    let b = stream::iter(["x", "y"]);
    let items: Vec<_> = combine_latest(a, b).collect().await;

    assert_eq!(items.len(), 4);
    assert!(items.contains(&(3, "y")));
}

#[tokio::test]
async fn failing_branch_a_stream_yields_failure() {
    let root = PropRoot::<PropA<Fails<PropertyC, ErrorC>>, PropB>::new();
    let items: Vec<_> = root.resolve_stream().collect().await;

    assert_eq!(items, vec![Outcome::failure(RootError::C(ErrorC))]);
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dropping_subscription_releases_upstream() {
    let node = PropA::<GuardedC>::new();
    let released = Arc::clone(&node.property_c().released);

    let items: Vec<_> = node.resolve_stream().take(3).collect().await;
    assert_eq!(items.len(), 3);
    assert!(released.load(Ordering::SeqCst));
}

#[tokio::test]
async fn independent_subscriptions_share_the_cached_child() {
    let node = PropA::<GuardedC>::new();

    let mut kept = node.resolve_stream();
    let dropped = node.resolve_stream();
    drop(dropped);

    // Both subscriptions went through the one cached child.
    assert_eq!(node.property_c().subscriptions.load(Ordering::SeqCst), 2);
    assert!(kept.next().await.is_some());
    assert!(kept.next().await.is_some());
}
