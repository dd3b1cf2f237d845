// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::FusedStream;
use futures::{stream, Stream, StreamExt};
use sieve_core::{ComparisonOutcome, StreamItem};
use sieve_stream::{ByEquality, Comparator, DedupStage};
use sieve_test_utils::{
    assert_stream_ended, test_channel,
    test_data::{tagged, Tagged},
    unwrap_stream, unwrap_value, TestFailure,
};

/// Compares labels, and refuses to look at anything without one.
struct LabelComparator;

impl Comparator<Tagged, TestFailure> for LabelComparator {
    fn compare(&mut self, previous: &Tagged, candidate: &Tagged) -> ComparisonOutcome<TestFailure> {
        if candidate.label.is_empty() {
            return ComparisonOutcome::ComparisonFailed(TestFailure::RejectedId(candidate.id));
        }
        ComparisonOutcome::from_equality(previous.label == candidate.label)
    }
}

#[tokio::test]
async fn test_dedup_stage_with_custom_comparator() {
    // Arrange
    let upstream = stream::iter(vec![
        Tagged::new(1, "a"),
        Tagged::new(2, "a"),
        Tagged::new(3, "b"),
        Tagged::new(4, ""),
        Tagged::new(5, "c"),
    ])
    .map(StreamItem::<Tagged, TestFailure>::Value);
    let mut stage = DedupStage::new(upstream, LabelComparator);

    // Act & Assert
    assert_eq!(unwrap_value(&mut stage, 500).await.id, 1);
    assert_eq!(unwrap_value(&mut stage, 500).await.id, 3);
    assert_eq!(
        unwrap_stream(&mut stage, 500).await.err(),
        Some(TestFailure::RejectedId(4))
    );
    assert_stream_ended(&mut stage, 500).await;
}

#[tokio::test]
async fn test_dedup_stage_last_accepted_tracks_emitted_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, upstream) = test_channel::<u32>();
    let mut stage = DedupStage::new(upstream, ByEquality);
    assert_eq!(stage.last_accepted(), None);

    // Act & Assert
    tx.send(1)?;
    tx.send(1)?;
    tx.send(2)?;
    assert_eq!(unwrap_value(&mut stage, 500).await, 1);
    assert_eq!(stage.last_accepted(), Some(&1));
    assert_eq!(unwrap_value(&mut stage, 500).await, 2);
    assert_eq!(stage.last_accepted(), Some(&2));

    drop(tx);
    assert_stream_ended(&mut stage, 500).await;
    assert_eq!(stage.last_accepted(), None);
    Ok(())
}

#[tokio::test]
async fn test_dedup_stage_is_fused_after_error() {
    // Arrange
    let upstream = stream::iter(vec![
        StreamItem::Value(tagged(1)),
        StreamItem::Error(TestFailure::upstream("gone")),
    ]);
    let mut stage = DedupStage::new(upstream, LabelComparator);

    // Act
    let _ = unwrap_value(&mut stage, 500).await;
    assert!(!stage.is_terminated());
    let _ = unwrap_stream(&mut stage, 500).await;

    // Assert
    assert!(stage.is_terminated());
    assert_eq!(stage.size_hint(), (0, Some(0)));
    assert_stream_ended(&mut stage, 500).await;
    assert_stream_ended(&mut stage, 500).await;
}

#[test]
fn test_dedup_stage_size_hint_allows_full_suppression() {
    // Arrange
    let upstream = stream::iter(vec![1, 1, 1]).map(StreamItem::<i32, TestFailure>::Value);

    // Act
    let stage = DedupStage::new(upstream, ByEquality);

    // Assert
    assert_eq!(stage.size_hint(), (0, Some(3)));
}

#[test]
fn test_dedup_stage_size_hint_unbounded_for_channel_upstream() {
    // Arrange
    let (_tx, upstream) = test_channel::<u32>();

    // Act
    let stage = DedupStage::new(upstream, ByEquality);

    // Assert
    assert_eq!(stage.size_hint(), (0, None));
}
