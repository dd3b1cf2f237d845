// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the sieve workspace.
//!
//! Production code builds pipelines from streams; tests need to push values in
//! imperatively. [`test_channel`] and [`test_channel_with_errors`] bridge the two:
//! the sender stays in the test, the stream goes into the operator under test.
//!
//! # Fixtures
//!
//! - [`fish`](test_data::one_fish) strings: `onefish`, `twofish`, `redfish`, `bluefish`
//! - [`Tagged`](test_data::Tagged): a record compared by `id`, with a free-form label
//! - [`TestFailure`]: an error type that compares by value, for verbatim pass-through checks
//!
//! # Example
//!
//! ```rust
//! use sieve_test_utils::{assert_no_element_emitted, test_channel, unwrap_value};
//! use sieve_test_utils::test_data::{one_fish, two_fish};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, mut stream) = test_channel::<String>();
//!
//! tx.send(one_fish()).unwrap();
//! assert_eq!(unwrap_value(&mut stream, 500).await, one_fish());
//! assert_no_element_emitted(&mut stream, 10).await;
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod failure;
pub mod helpers;
pub mod test_data;

use futures::{Stream, StreamExt};
use sieve_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

// Re-export commonly used test utilities
pub use failure::TestFailure;
pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_until_end, unwrap_stream,
    unwrap_value,
};
pub use test_data::Tagged;

/// Creates a test channel that wraps every sent value in `StreamItem::Value`.
///
/// Dropping the sender completes the stream.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T, TestFailure>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts raw `StreamItem`s, for error propagation tests.
pub fn test_channel_with_errors<T: Send + 'static, E: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T, E>>,
    impl Stream<Item = StreamItem<T, E>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
