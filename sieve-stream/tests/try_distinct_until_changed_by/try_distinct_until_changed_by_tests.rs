// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use sieve_core::{ComparisonOutcome, StreamItem};
use sieve_stream::TryDistinctUntilChangedByExt;
use sieve_test_utils::{
    assert_no_element_emitted, collect_until_end, test_channel,
    test_data::{id_comparator_rejecting, tagged, tagged_run, Tagged},
    unwrap_value, TestFailure,
};

#[tokio::test]
async fn test_try_distinct_until_changed_by_behaves_like_infallible_when_never_failing() {
    // Arrange
    let upstream = stream::iter(tagged_run()).map(StreamItem::<Tagged, TestFailure>::Value);

    // Act
    let (values, error) =
        collect_until_end(upstream.try_distinct_until_changed_by(id_comparator_rejecting(99))).await;

    // Assert
    let ids: Vec<u32> = values.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 1]);
    assert!(error.is_none());
}

#[tokio::test]
async fn test_try_distinct_until_changed_by_step_by_step() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Tagged>();
    let mut distinct = stream.try_distinct_until_changed_by(id_comparator_rejecting(99));

    // Act & Assert
    tx.send(tagged(1))?;
    assert_eq!(unwrap_value(&mut distinct, 500).await.id, 1);

    tx.send(tagged(1))?;
    assert_no_element_emitted(&mut distinct, 50).await;

    tx.send(tagged(2))?;
    assert_eq!(unwrap_value(&mut distinct, 500).await.id, 2);
    Ok(())
}

#[tokio::test]
async fn test_try_distinct_until_changed_by_first_value_never_reaches_comparator() -> anyhow::Result<()> {
    // Arrange: the comparator refuses everything, but a lone value needs no comparison
    let (tx, stream) = test_channel::<Tagged>();
    let mut distinct = stream.try_distinct_until_changed_by(|_: &Tagged, _: &Tagged| {
        ComparisonOutcome::ComparisonFailed(TestFailure::RejectedId(0))
    });

    // Act
    tx.send(tagged(5))?;

    // Assert
    assert_eq!(unwrap_value(&mut distinct, 500).await.id, 5);
    assert_no_element_emitted(&mut distinct, 50).await;
    Ok(())
}

#[tokio::test]
async fn test_try_distinct_until_changed_by_accepts_result_comparators() {
    // Arrange
    fn same_parity(previous: &i64, candidate: &i64) -> Result<bool, TestFailure> {
        if *candidate < 0 {
            return Err(TestFailure::upstream("negative reading"));
        }
        Ok(previous % 2 == candidate % 2)
    }

    let upstream = stream::iter(vec![2, 4, 5, 7, 8, -1, 10]).map(StreamItem::<i64, TestFailure>::Value);

    // Act
    let (values, error) = collect_until_end(
        upstream.try_distinct_until_changed_by(|previous: &i64, candidate: &i64| {
            same_parity(previous, candidate).into()
        }),
    )
    .await;

    // Assert
    assert_eq!(values, vec![2, 5, 8]);
    assert_eq!(error, Some(TestFailure::upstream("negative reading")));
}

#[tokio::test]
async fn test_try_distinct_until_changed_by_stateful_comparator() {
    // Arrange: a comparator counting its own invocations
    let mut calls = 0_usize;
    let upstream = stream::iter(vec![1, 1, 2, 3]).map(StreamItem::<i32, TestFailure>::Value);

    // Act
    let (values, _) = collect_until_end(upstream.try_distinct_until_changed_by(
        |previous: &i32, candidate: &i32| {
            calls += 1;
            ComparisonOutcome::from_equality(previous == candidate)
        },
    ))
    .await;

    // Assert
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(calls, 3);
}
