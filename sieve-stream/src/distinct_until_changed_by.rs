// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::comparator::ByPredicate;
use crate::dedup::DedupStage;
use futures::Stream;
use sieve_core::StreamItem;

/// Extension trait providing the `distinct_until_changed_by` operator for streams.
///
/// Filters consecutive duplicates using a custom, infallible comparison function.
pub trait DistinctUntilChangedByExt<T, E>: Stream<Item = StreamItem<T, E>> + Sized {
    /// Emits values only when `compare(previous, candidate)` returns `false`.
    ///
    /// `previous` is the last emitted value, `candidate` the newly received one.
    /// Returning `true` marks the candidate as a duplicate and drops it.
    ///
    /// # Examples
    ///
    /// ## Custom Equality by Field
    ///
    /// ```rust
    /// use sieve_core::StreamItem;
    /// use sieve_stream::DistinctUntilChangedByExt;
    /// use futures::{stream, StreamExt};
    ///
    /// #[derive(Clone, Debug)]
    /// struct User {
    ///     id: u32,
    ///     name: &'static str,
    /// }
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let users = [
    ///     User { id: 1, name: "Alice" },
    ///     User { id: 1, name: "Alice Updated" },
    ///     User { id: 2, name: "Bob" },
    /// ];
    /// let upstream = stream::iter(users).map(StreamItem::<_, ()>::Value);
    ///
    /// let ids: Vec<u32> = upstream
    ///     .distinct_until_changed_by(|a, b| a.id == b.id)
    ///     .filter_map(|item| async move { item.ok().map(|u| u.id) })
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(ids, vec![1, 2]);
    /// # }
    /// ```
    ///
    /// ## Threshold comparison
    ///
    /// Suppression is relative to the last *emitted* value, so slow drift is still
    /// reported once it exceeds the threshold:
    ///
    /// ```rust
    /// use sieve_core::StreamItem;
    /// use sieve_stream::DistinctUntilChangedByExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let readings = [1.0_f64, 1.05, 1.15, 1.18, 1.30];
    /// let upstream = stream::iter(readings).map(StreamItem::<_, ()>::Value);
    ///
    /// let emitted: Vec<f64> = upstream
    ///     .distinct_until_changed_by(|a: &f64, b: &f64| (a - b).abs() < 0.1)
    ///     .filter_map(|item| async move { item.ok() })
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(emitted, vec![1.0, 1.15, 1.30]);
    /// # }
    /// ```
    fn distinct_until_changed_by<F>(self, compare: F) -> DedupStage<Self, T, E, ByPredicate<F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;
}

impl<S, T, E> DistinctUntilChangedByExt<T, E> for S
where
    S: Stream<Item = StreamItem<T, E>>,
{
    fn distinct_until_changed_by<F>(self, compare: F) -> DedupStage<Self, T, E, ByPredicate<F>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        DedupStage::new(self, ByPredicate(compare))
    }
}
