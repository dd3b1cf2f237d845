// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use sieve_core::StreamItem;
use sieve_stream::DistinctUntilChangedByExt;
use sieve_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_until_end, test_channel,
    test_data::{tagged, tagged_run, Tagged},
    unwrap_value, TestFailure,
};

#[tokio::test]
async fn test_distinct_until_changed_by_id_ignores_labels() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Tagged>();
    let mut distinct = stream.distinct_until_changed_by(|a: &Tagged, b: &Tagged| a.id == b.id);

    // Act & Assert
    tx.send(Tagged::new(1, "first"))?;
    let emitted = unwrap_value(&mut distinct, 500).await;
    assert_eq!((emitted.id, emitted.label.as_str()), (1, "first"));

    tx.send(Tagged::new(1, "relabelled"))?;
    assert_no_element_emitted(&mut distinct, 50).await;

    tx.send(Tagged::new(2, "second"))?;
    let emitted = unwrap_value(&mut distinct, 500).await;
    assert_eq!((emitted.id, emitted.label.as_str()), (2, "second"));
    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_by_tagged_run() {
    // Arrange
    let upstream = stream::iter(tagged_run()).map(StreamItem::<Tagged, TestFailure>::Value);

    // Act
    let (values, error) =
        collect_until_end(upstream.distinct_until_changed_by(|a: &Tagged, b: &Tagged| a.id == b.id)).await;

    // Assert
    let ids: Vec<u32> = values.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 1]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_distinct_until_changed_by_keeps_first_of_each_run() {
    // Arrange
    let upstream = stream::iter(vec![
        Tagged::new(7, "kept"),
        Tagged::new(7, "dropped"),
        Tagged::new(7, "dropped too"),
    ])
    .map(StreamItem::<Tagged, TestFailure>::Value);

    // Act
    let (values, _) =
        collect_until_end(upstream.distinct_until_changed_by(|a: &Tagged, b: &Tagged| a.id == b.id)).await;

    // Assert
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].label, "kept");
}

#[tokio::test]
async fn test_distinct_until_changed_by_case_insensitive() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<String>();
    let mut distinct =
        stream.distinct_until_changed_by(|a: &String, b: &String| a.eq_ignore_ascii_case(b));

    // Act
    for word in ["Fish", "FISH", "fish", "Bird", "bird", "fish"] {
        tx.send(word.to_string())?;
    }
    drop(tx);

    // Assert
    assert_eq!(unwrap_value(&mut distinct, 500).await, "Fish");
    assert_eq!(unwrap_value(&mut distinct, 500).await, "Bird");
    assert_eq!(unwrap_value(&mut distinct, 500).await, "fish");
    assert_stream_ended(&mut distinct, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_by_threshold_compares_against_last_emitted() {
    // Arrange: readings within 5 of the last reported one are noise
    let upstream = stream::iter(vec![100, 103, 106, 108, 111, 90])
        .map(StreamItem::<i32, TestFailure>::Value);

    // Act
    let (values, _) = collect_until_end(
        upstream.distinct_until_changed_by(|previous: &i32, candidate: &i32| {
            (previous - candidate).abs() <= 5
        }),
    )
    .await;

    // Assert: 106 differs from 100 by 6 even though it is close to 103,
    // and 111 is within 5 of 106 so it is dropped
    assert_eq!(values, vec![100, 106, 90]);
}

#[tokio::test]
async fn test_distinct_until_changed_by_never_equal_passes_everything() {
    // Arrange
    let input: Vec<Tagged> = [3, 3, 3].into_iter().map(tagged).collect();
    let upstream = stream::iter(input).map(StreamItem::<Tagged, TestFailure>::Value);

    // Act
    let (values, _) =
        collect_until_end(upstream.distinct_until_changed_by(|_: &Tagged, _: &Tagged| false)).await;

    // Assert
    assert_eq!(values.len(), 3);
}

#[tokio::test]
async fn test_distinct_until_changed_by_forwards_upstream_error() {
    // Arrange
    let upstream = stream::iter(vec![
        StreamItem::Value(tagged(1)),
        StreamItem::Value(tagged(1)),
        StreamItem::Error(TestFailure::upstream("feed lost")),
        StreamItem::Value(tagged(2)),
    ]);

    // Act
    let (values, error) =
        collect_until_end(upstream.distinct_until_changed_by(|a: &Tagged, b: &Tagged| a.id == b.id)).await;

    // Assert
    assert_eq!(values.len(), 1);
    assert_eq!(error, Some(TestFailure::upstream("feed lost")));
}
