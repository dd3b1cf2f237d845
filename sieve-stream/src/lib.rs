// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Adjacent-duplicate suppression for streams of [`StreamItem`](sieve_core::StreamItem).
//!
//! All operators share one stage, [`DedupStage`], and differ only in the
//! [`Comparator`](comparator::Comparator) they plug into it:
//!
//! | Operator | Comparator | Can fail |
//! |----------|------------|----------|
//! | [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed) | `PartialEq` | no |
//! | [`distinct_until_changed_by`](DistinctUntilChangedByExt::distinct_until_changed_by) | `FnMut(&T, &T) -> bool` | no |
//! | [`try_distinct_until_changed_by`](TryDistinctUntilChangedByExt::try_distinct_until_changed_by) | `FnMut(&T, &T) -> ComparisonOutcome<E>` | yes |
//!
//! # Semantics
//!
//! - The first value is always emitted.
//! - Each later value is compared with the most recently **emitted** value, never with
//!   the last received one. `A, A, B, B, A` becomes `A, B, A`.
//! - Any error, from upstream or from the comparator, is forwarded unchanged as the
//!   final item and the stream ends. The value that made the comparator fail is
//!   never emitted.
//! - The stage is pull-based: it only reads upstream when polled, so downstream
//!   back-pressure is respected and dropping the stage cancels the upstream.
//!
//! # Example
//!
//! ```rust
//! use sieve_core::{ComparisonOutcome, StreamItem};
//! use sieve_stream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let upstream = stream::iter(["a", "A", "b", "?", "c"]).map(StreamItem::<_, String>::Value);
//!
//! let mut distinct = upstream.try_distinct_until_changed_by(|previous: &&str, candidate: &&str| {
//!     if *candidate == "?" {
//!         return ComparisonOutcome::ComparisonFailed("unknown symbol".to_string());
//!     }
//!     ComparisonOutcome::from_equality(previous.eq_ignore_ascii_case(candidate))
//! });
//!
//! assert_eq!(distinct.next().await, Some(StreamItem::Value("a")));
//! assert_eq!(distinct.next().await, Some(StreamItem::Value("b")));
//! assert!(distinct.next().await.unwrap().is_error());
//! assert!(distinct.next().await.is_none());
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod comparator;
pub mod dedup;
pub mod distinct_until_changed;
pub mod distinct_until_changed_by;
pub mod into_sieve_stream;
pub mod prelude;
pub mod try_distinct_until_changed_by;

// Re-export commonly used types
pub use comparator::{ByEquality, ByFallible, ByPredicate, Comparator};
pub use dedup::{DedupStage, DedupState, Step, StageEnd};
pub use distinct_until_changed::DistinctUntilChangedExt;
pub use distinct_until_changed_by::DistinctUntilChangedByExt;
pub use into_sieve_stream::IntoSieveStream;
pub use try_distinct_until_changed_by::TryDistinctUntilChangedByExt;
