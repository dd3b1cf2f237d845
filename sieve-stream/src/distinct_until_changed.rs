// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::comparator::ByEquality;
use crate::dedup::DedupStage;
use futures::Stream;
use sieve_core::StreamItem;

/// Extension trait providing the `distinct_until_changed` operator for streams.
///
/// This operator filters out consecutive duplicate values using `PartialEq`,
/// emitting only when the value changes from the previous emission.
pub trait DistinctUntilChangedExt<T, E>: Stream<Item = StreamItem<T, E>> + Sized {
    /// Emits values only when they differ from the previously emitted value.
    ///
    /// # Behavior
    ///
    /// - First value is always emitted (no previous value to compare)
    /// - Subsequent values are compared to the last *emitted* value, so a value
    ///   reappearing after a different one is emitted again
    /// - Upstream errors are forwarded unchanged and terminate the stream
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sieve_core::StreamItem;
    /// use sieve_stream::DistinctUntilChangedExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let fish = ["onefish", "onefish", "twofish", "twofish", "onefish"];
    /// let upstream = stream::iter(fish).map(StreamItem::<_, ()>::Value);
    ///
    /// let emitted: Vec<_> = upstream
    ///     .distinct_until_changed()
    ///     .filter_map(|item| async move { item.ok() })
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(emitted, vec!["onefish", "twofish", "onefish"]);
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`distinct_until_changed_by`](crate::DistinctUntilChangedByExt::distinct_until_changed_by) - Custom predicate
    /// - [`try_distinct_until_changed_by`](crate::TryDistinctUntilChangedByExt::try_distinct_until_changed_by) - Comparator that may fail
    fn distinct_until_changed(self) -> DedupStage<Self, T, E, ByEquality>
    where
        T: Clone + PartialEq;
}

impl<S, T, E> DistinctUntilChangedExt<T, E> for S
where
    S: Stream<Item = StreamItem<T, E>>,
{
    fn distinct_until_changed(self) -> DedupStage<Self, T, E, ByEquality>
    where
        T: Clone + PartialEq,
    {
        DedupStage::new(self, ByEquality)
    }
}
