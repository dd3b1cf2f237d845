// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Sieve
//!
//! Removes adjacent duplicates from push-based async streams.
//!
//! ## Overview
//!
//! A sieve pipeline has three parts:
//!
//! - **Source**: a [`Subject`] that any number of producers push into, or any
//!   `Stream<Item = StreamItem<T, E>>`.
//! - **Stage**: one of the `distinct_until_changed*` operators. Each value is compared
//!   with the last value that was let through; duplicates are dropped.
//! - **Sink**: [`SubscribeExt::subscribe`], which awaits a handler per value and
//!   reports a [`Termination`].
//!
//! The comparator may fail. When it does, the failure becomes the stream's terminal
//! error and nothing after it is delivered. Errors coming from upstream end the
//! stream the same way.
//!
//! ## Quick Start
//!
//! ```rust
//! use sieve::prelude::*;
//! use sieve::{ComparisonOutcome, Flow, Subject};
//!
//! #[derive(Clone, Debug)]
//! struct Quote { symbol: &'static str, price: u32 }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<Quote, String>::new();
//! let quotes = subject.subscribe().unwrap();
//!
//! let consumer = tokio::spawn(
//!     quotes
//!         .try_distinct_until_changed_by(|previous: &Quote, candidate: &Quote| {
//!             if previous.symbol != candidate.symbol {
//!                 return ComparisonOutcome::ComparisonFailed(format!(
//!                     "mixed symbols: {} and {}",
//!                     previous.symbol, candidate.symbol
//!                 ));
//!             }
//!             ComparisonOutcome::from_equality(previous.price == candidate.price)
//!         })
//!         .subscribe(|quote| async move {
//!             println!("{} {}", quote.symbol, quote.price);
//!             Flow::Continue
//!         }, None),
//! );
//!
//! subject.next(Quote { symbol: "ACME", price: 10 }).unwrap();
//! subject.next(Quote { symbol: "ACME", price: 10 }).unwrap();
//! subject.next(Quote { symbol: "ACME", price: 11 }).unwrap();
//! subject.next(Quote { symbol: "INIT", price: 11 }).unwrap();
//!
//! let termination = consumer.await.unwrap();
//! assert_eq!(termination.err(), Some("mixed symbols: ACME and INIT".to_string()));
//! # }
//! ```
//!
//! ## Features
//!
//! - `tracing`: route the stage and subscriber diagnostics through `tracing`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use sieve_core::{
    CancellationToken, ComparisonOutcome, SieveError, StreamItem, Subject, SubjectError,
    SubjectStream,
};

// Re-export the stage and its comparators
pub use sieve_stream::{ByEquality, ByFallible, ByPredicate, Comparator, DedupStage, DedupState};

// Re-export the subscriber
pub use sieve_exec::{Flow, Termination};

/// Prelude module for convenient imports
pub mod prelude {
    pub use sieve_core::{ComparisonOutcome, StreamItem};
    pub use sieve_exec::SubscribeExt;
    pub use sieve_stream::prelude::*;
}
