// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use sieve_core::StreamItem;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Panics if the stream yields anything (item or end) within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    tokio::select! {
        item = stream.next() => {
            panic!("Unexpected emission, expected no output: {item:?}");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Waits up to `timeout_ms` for the next item.
///
/// # Panics
///
/// Panics on timeout or if the stream has ended.
pub async fn unwrap_stream<S, T, E>(stream: &mut S, timeout_ms: u64) -> StreamItem<T, E>
where
    S: Stream<Item = StreamItem<T, E>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected an item but the stream ended"),
        Err(_) => panic!("Timed out after {timeout_ms}ms waiting for an item"),
    }
}

/// Waits for the next item and returns its value.
///
/// # Panics
///
/// Panics on timeout, end of stream, or if the item is an error.
pub async fn unwrap_value<S, T, E>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = StreamItem<T, E>> + Unpin,
    E: Debug,
{
    unwrap_stream(stream, timeout_ms).await.unwrap()
}

/// Panics unless the stream reports its end within `timeout_ms`.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(item)) => panic!("Expected end of stream, got {item:?}"),
        Err(_) => panic!("Timed out after {timeout_ms}ms waiting for end of stream"),
    }
}

/// Drains a finite stream into its values and the terminal error, if any.
///
/// # Panics
///
/// Panics if anything follows an error item.
pub async fn collect_until_end<S, T, E>(stream: S) -> (Vec<T>, Option<E>)
where
    S: Stream<Item = StreamItem<T, E>>,
    T: Debug,
    E: Debug,
{
    let mut stream = Box::pin(stream);
    let mut values = Vec::new();

    while let Some(item) = stream.next().await {
        match item {
            StreamItem::Value(value) => values.push(value),
            StreamItem::Error(error) => {
                if let Some(extra) = stream.next().await {
                    panic!("Item after terminal error {error:?}: {extra:?}");
                }
                return (values, Some(error));
            }
        }
    }

    (values, None)
}
