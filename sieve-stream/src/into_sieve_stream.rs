// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Map, StreamExt};
use futures::Stream;
use sieve_core::StreamItem;

/// Lifts a plain stream of values into a stream of [`StreamItem`]s.
///
/// Every item becomes a `StreamItem::Value`; the error type `E` is chosen by the
/// caller (usually inferred from the operator chain).
///
/// ```rust
/// use sieve_stream::{DistinctUntilChangedExt, IntoSieveStream};
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut distinct = stream::iter([1, 1, 2])
///     .into_sieve_stream::<()>()
///     .distinct_until_changed();
///
/// assert_eq!(distinct.next().await.unwrap().unwrap(), 1);
/// assert_eq!(distinct.next().await.unwrap().unwrap(), 2);
/// assert!(distinct.next().await.is_none());
/// # }
/// ```
pub trait IntoSieveStream: Stream + Sized {
    /// Wraps every item in `StreamItem::Value`.
    fn into_sieve_stream<E>(self) -> Map<Self, fn(Self::Item) -> StreamItem<Self::Item, E>> {
        self.map(StreamItem::Value as fn(Self::Item) -> StreamItem<Self::Item, E>)
    }
}

impl<S: Stream> IntoSieveStream for S {}
