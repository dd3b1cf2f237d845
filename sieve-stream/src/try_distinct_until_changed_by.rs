// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::comparator::ByFallible;
use crate::dedup::DedupStage;
use futures::Stream;
use sieve_core::{ComparisonOutcome, StreamItem};

/// Extension trait providing the `try_distinct_until_changed_by` operator for streams.
///
/// Like [`distinct_until_changed_by`](crate::DistinctUntilChangedByExt::distinct_until_changed_by),
/// but the comparator may refuse to compare two values.
pub trait TryDistinctUntilChangedByExt<T, E>: Stream<Item = StreamItem<T, E>> + Sized {
    /// Suppresses adjacent duplicates judged by a comparator that may fail.
    ///
    /// `compare(previous, candidate)` returns a [`ComparisonOutcome`]:
    ///
    /// - `Equal` - the candidate is dropped
    /// - `NotEqual` - the candidate is emitted and becomes the new comparison base
    /// - `ComparisonFailed(reason)` - `reason` is emitted as the stream's terminal
    ///   `Error`, the candidate is discarded, the upstream is dropped and the stream ends
    ///
    /// The first failure poisons the stream: no later value is ever emitted, even
    /// one that would have compared successfully.
    ///
    /// `Result<bool, E>` converts into a [`ComparisonOutcome`], so comparators written
    /// with `?` can end in `.into()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sieve_core::{ComparisonOutcome, StreamItem};
    /// use sieve_stream::TryDistinctUntilChangedByExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let ids = [1, 1, 2, 2, 5, 6];
    /// let upstream = stream::iter(ids).map(StreamItem::<u32, String>::Value);
    ///
    /// let items: Vec<_> = upstream
    ///     .try_distinct_until_changed_by(|previous: &u32, candidate: &u32| {
    ///         if *previous == 5 || *candidate == 5 {
    ///             ComparisonOutcome::ComparisonFailed(format!("cannot compare {previous} and {candidate}"))
    ///         } else {
    ///             ComparisonOutcome::from_equality(previous == candidate)
    ///         }
    ///     })
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(items.len(), 3);
    /// assert_eq!(items[0], StreamItem::Value(1));
    /// assert_eq!(items[1], StreamItem::Value(2));
    /// assert_eq!(items[2].clone().err(), Some("cannot compare 2 and 5".to_string()));
    /// # }
    /// ```
    fn try_distinct_until_changed_by<F>(self, compare: F) -> DedupStage<Self, T, E, ByFallible<F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> ComparisonOutcome<E>;
}

impl<S, T, E> TryDistinctUntilChangedByExt<T, E> for S
where
    S: Stream<Item = StreamItem<T, E>>,
{
    fn try_distinct_until_changed_by<F>(self, compare: F) -> DedupStage<Self, T, E, ByFallible<F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> ComparisonOutcome<E>,
    {
        DedupStage::new(self, ByFallible(compare))
    }
}
