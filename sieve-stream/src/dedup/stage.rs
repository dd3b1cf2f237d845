// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::state::{DedupState, Step};
use crate::comparator::Comparator;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use sieve_core::StreamItem;

/// Stream stage suppressing adjacent duplicates with a possibly failing comparator.
///
/// Built by [`distinct_until_changed`](crate::DistinctUntilChangedExt::distinct_until_changed),
/// [`distinct_until_changed_by`](crate::DistinctUntilChangedByExt::distinct_until_changed_by)
/// and [`try_distinct_until_changed_by`](crate::TryDistinctUntilChangedByExt::try_distinct_until_changed_by),
/// or directly with [`DedupStage::new`] for a custom [`Comparator`].
///
/// # Terminal behavior
///
/// - Upstream end: the stage ends.
/// - Upstream `Error(e)`: `e` is yielded unchanged, then the stage ends.
/// - Comparator failure: the reason is yielded as `Error`, the offending value is
///   discarded, then the stage ends.
///
/// In every case the upstream stream is dropped as soon as the terminal signal is
/// seen, so nothing more is pulled from it and the retained value is released.
/// Values are only pulled when the stage itself is polled.
#[pin_project]
pub struct DedupStage<S, T, E, C> {
    #[pin]
    upstream: Option<S>,
    state: DedupState<T, E, C>,
}

impl<S, T, E, C> DedupStage<S, T, E, C>
where
    S: Stream<Item = StreamItem<T, E>>,
    T: Clone,
    C: Comparator<T, E>,
{
    /// Attaches a new stage to `upstream`.
    pub const fn new(upstream: S, comparator: C) -> Self {
        Self {
            upstream: Some(upstream),
            state: DedupState::new(comparator),
        }
    }
}

impl<S, T, E, C> DedupStage<S, T, E, C> {
    /// The value the next candidate will be compared against.
    pub const fn last_accepted(&self) -> Option<&T> {
        self.state.last_accepted()
    }
}

impl<S, T, E, C> Stream for DedupStage<S, T, E, C>
where
    S: Stream<Item = StreamItem<T, E>>,
    T: Clone,
    C: Comparator<T, E>,
{
    type Item = StreamItem<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let Some(upstream) = this.upstream.as_mut().as_pin_mut() else {
                return Poll::Ready(None);
            };

            match ready!(upstream.poll_next(cx)) {
                Some(StreamItem::Value(value)) => match this.state.on_value(value) {
                    Step::Emit(value) => return Poll::Ready(Some(StreamItem::Value(value))),
                    Step::Suppress | Step::Ignored => {}
                    Step::Fail(reason) => {
                        warn!("distinct stage: comparator failed, terminating stream");
                        this.upstream.set(None);
                        return Poll::Ready(Some(StreamItem::Error(reason)));
                    }
                },
                Some(StreamItem::Error(error)) => {
                    debug!("distinct stage: forwarding upstream error");
                    this.state.on_failed();
                    this.upstream.set(None);
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                None => {
                    this.state.on_completed();
                    this.upstream.set(None);
                    return Poll::Ready(None);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.upstream {
            // Any value may be suppressed
            Some(upstream) => (0, upstream.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<S, T, E, C> FusedStream for DedupStage<S, T, E, C>
where
    S: Stream<Item = StreamItem<T, E>>,
    T: Clone,
    C: Comparator<T, E>,
{
    fn is_terminated(&self) -> bool {
        self.upstream.is_none()
    }
}
