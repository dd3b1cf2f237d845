// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::flow::{Flow, Termination};
use async_trait::async_trait;
use core::future::Future;
use core::pin::pin;
use futures::stream::{Stream, StreamExt};
use sieve_core::{CancellationToken, StreamItem};

/// Extension trait providing a sequential, back-pressured subscriber for streams.
#[async_trait]
pub trait SubscribeExt<T, E>: Stream<Item = StreamItem<T, E>> + Sized {
    /// Consumes the stream, handing each value to `on_next` one at a time.
    ///
    /// The next value is only pulled once the future returned by `on_next` has
    /// resolved, so a slow handler holds back everything upstream of it. Values
    /// wait in whatever queue feeds the pipeline; none are dropped.
    ///
    /// # Termination
    ///
    /// - stream end: [`Termination::Completed`]
    /// - an `Error` item: [`Termination::Failed`] with the error unchanged
    /// - `on_next` returns [`Flow::Stop`], or `cancellation_token` is cancelled:
    ///   [`Termination::Cancelled`]
    ///
    /// The stream is dropped before this returns, whichever way it ends. A cancel
    /// that arrives while waiting for upstream takes effect immediately; one that
    /// arrives while `on_next` runs takes effect once it resolves.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_core::{StreamItem, Subject};
    /// use sieve_exec::{Flow, SubscribeExt};
    /// use sieve_stream::DistinctUntilChangedExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let subject = Subject::<&'static str>::new();
    /// let stream = subject.subscribe().unwrap();
    ///
    /// for fish in ["onefish", "onefish", "twofish", "twofish", "onefish"] {
    ///     subject.next(fish).unwrap();
    /// }
    /// subject.close();
    ///
    /// let mut seen = Vec::new();
    /// let termination = stream
    ///     .distinct_until_changed()
    ///     .subscribe(
    ///         move |fish| {
    ///             seen.push(fish);
    ///             let count = seen.len();
    ///             async move {
    ///                 assert!(count <= 3);
    ///                 Flow::Continue
    ///             }
    ///         },
    ///         None,
    ///     )
    ///     .await;
    ///
    /// assert!(termination.is_completed());
    /// # }
    /// ```
    async fn subscribe<F, Fut>(
        self,
        on_next: F,
        cancellation_token: Option<CancellationToken>,
    ) -> Termination<E>
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = Flow> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static;
}

#[async_trait]
impl<S, T, E> SubscribeExt<T, E> for S
where
    S: Stream<Item = StreamItem<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    async fn subscribe<F, Fut>(
        self,
        on_next: F,
        cancellation_token: Option<CancellationToken>,
    ) -> Termination<E>
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = Flow> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        subscribe_impl(self, on_next, cancellation_token.unwrap_or_default()).await
    }
}

async fn subscribe_impl<S, T, E, F, Fut>(
    stream: S,
    mut on_next: F,
    cancellation_token: CancellationToken,
) -> Termination<E>
where
    S: Stream<Item = StreamItem<T, E>>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Flow>,
{
    let mut stream = pin!(stream);

    loop {
        let Some(item) = cancellation_token.run_until_cancelled(stream.next()).await else {
            info!("subscription cancelled");
            return Termination::Cancelled;
        };

        match item {
            Some(StreamItem::Value(value)) => {
                if on_next(value).await.is_stop() {
                    info!("subscription stopped by its handler");
                    return Termination::Cancelled;
                }
            }
            Some(StreamItem::Error(error)) => {
                warn!("subscription ended with an upstream error");
                return Termination::Failed(error);
            }
            None => return Termination::Completed,
        }
    }
}
