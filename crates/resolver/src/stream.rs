//! Push-based resolution primitives.
//!
//! Every stream here is cold: building one does nothing until it is polled,
//! and each call hands out an independent subscription. Dropping a stream
//! (for example after `StreamExt::take`) drops every upstream it owns and
//! leaves other subscriptions alone.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{self, BoxStream, FusedStream, Fuse, Stream, StreamExt};
use pin_project::pin_project;
use tessera_outcome::Outcome;

/// A live sequence of outcomes produced by a resolver.
pub type OutcomeStream<V, E, W> = BoxStream<'static, Outcome<V, E, W>>;

/// A stream that yields `item` once and then completes.
pub fn once<T: Send + 'static>(item: T) -> BoxStream<'static, T> {
    stream::once(futures::future::ready(item)).boxed()
}

/// Pair the most recent item of `a` with the most recent item of `b`.
///
/// - Nothing is emitted until both sides have produced at least one item.
/// - After that, every item from either side produces one emission, reusing
///   the other side's latest item (which may be stale).
/// - The combined stream ends only after **both** sides have ended; if either
///   side stays open, so does the result.
///
/// The side polled first alternates between polls so a side that is always
/// ready cannot starve the other.
pub fn combine_latest<A, B>(a: A, b: B) -> CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
    A::Item: Clone,
    B::Item: Clone,
{
    CombineLatest {
        a: a.fuse(),
        b: b.fuse(),
        latest_a: None,
        latest_b: None,
        b_first: false,
    }
}

/// Stream returned by [`combine_latest`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct CombineLatest<A: Stream, B: Stream> {
    #[pin]
    a: Fuse<A>,
    #[pin]
    b: Fuse<B>,
    latest_a: Option<A::Item>,
    latest_b: Option<B::Item>,
    b_first: bool,
}

#[derive(Clone, Copy)]
enum Side {
    A,
    B,
}

impl<A, B> Stream for CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        let order = if *this.b_first {
            [Side::B, Side::A]
        } else {
            [Side::A, Side::B]
        };
        *this.b_first = !*this.b_first;

        // Each side is polled at most once per call.
        let mut progressed = false;
        for side in order {
            let received = match side {
                Side::A => match this.a.as_mut().poll_next(cx) {
                    Poll::Ready(Some(item)) => {
                        *this.latest_a = Some(item);
                        true
                    }
                    _ => false,
                },
                Side::B => match this.b.as_mut().poll_next(cx) {
                    Poll::Ready(Some(item)) => {
                        *this.latest_b = Some(item);
                        true
                    }
                    _ => false,
                },
            };

            if received {
                progressed = true;
                if let (Some(a), Some(b)) = (this.latest_a.as_ref(), this.latest_b.as_ref()) {
                    return Poll::Ready(Some((a.clone(), b.clone())));
                }
            }
        }

        if this.a.is_done() && this.b.is_done() {
            return Poll::Ready(None);
        }
        if progressed {
            // An item arrived but the other side has not emitted yet. A side
            // that consumed an item registered no waker, so schedule the next
            // poll ourselves instead of looping here.
            cx.waker().wake_by_ref();
        }
        Poll::Pending
    }
}

impl<A, B> FusedStream for CombineLatest<A, B>
where
    A: Stream,
    B: Stream,
    A::Item: Clone,
    B::Item: Clone,
{
    fn is_terminated(&self) -> bool {
        self.a.is_done() && self.b.is_done()
    }
}
