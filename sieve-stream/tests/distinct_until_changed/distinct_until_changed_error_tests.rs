// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sieve_core::{SieveError, StreamItem};
use sieve_stream::{DistinctUntilChangedExt, IntoSieveStream};
use sieve_test_utils::{
    assert_stream_ended, test_channel_with_errors,
    test_data::{one_fish, two_fish},
    unwrap_stream, unwrap_value, TestFailure,
};

#[tokio::test]
async fn test_distinct_until_changed_forwards_upstream_error_and_ends() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<String, TestFailure>();
    let mut distinct = stream.distinct_until_changed();

    // Act & Assert
    tx.send(StreamItem::Value(one_fish()))?;
    assert_eq!(unwrap_value(&mut distinct, 500).await, one_fish());

    tx.send(StreamItem::Error(TestFailure::upstream("socket closed")))?;
    assert_eq!(
        unwrap_stream(&mut distinct, 500).await.err(),
        Some(TestFailure::upstream("socket closed"))
    );

    // Upstream was released: later pushes go nowhere
    assert!(tx.is_closed());
    assert!(tx.send(StreamItem::Value(two_fish())).is_err());
    assert_stream_ended(&mut distinct, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_error_before_any_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<String, TestFailure>();
    let mut distinct = stream.distinct_until_changed();

    // Act
    tx.send(StreamItem::Error(TestFailure::upstream("early")))?;

    // Assert
    assert!(unwrap_stream(&mut distinct, 500).await.is_error());
    assert_stream_ended(&mut distinct, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_suppressed_duplicate_then_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<u32, TestFailure>();
    let mut distinct = stream.distinct_until_changed();

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(TestFailure::RejectedId(1)))?;

    // Assert
    assert_eq!(unwrap_value(&mut distinct, 500).await, 1);
    assert_eq!(
        unwrap_stream(&mut distinct, 500).await.err(),
        Some(TestFailure::RejectedId(1))
    );
    assert_stream_ended(&mut distinct, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_distinct_until_changed_with_default_error_type() {
    // Arrange
    let mut distinct = futures::stream::iter(vec![3, 3, 4])
        .into_sieve_stream::<SieveError>()
        .distinct_until_changed();

    // Assert
    assert_eq!(unwrap_value(&mut distinct, 500).await, 3);
    assert_eq!(unwrap_value(&mut distinct, 500).await, 4);
    assert_stream_ended(&mut distinct, 500).await;
}
