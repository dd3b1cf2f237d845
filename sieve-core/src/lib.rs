// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every sieve crate.
//!
//! - [`StreamItem`] carries either a value or the error that terminates a stream.
//! - [`ComparisonOutcome`] is the tri-state verdict of a deduplication comparator.
//! - [`Subject`] is the push-based entry point for feeding values into a pipeline.
//! - [`CancellationToken`] lets a downstream consumer stop a subscription.
//! - [`SieveError`] is the default error type carried by [`StreamItem`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod comparison;
pub mod error;
pub mod stream_item;
pub mod subject;
pub mod subject_error;

pub use self::cancellation_token::CancellationToken;
pub use self::comparison::ComparisonOutcome;
pub use self::error::{Result, SieveError};
pub use self::stream_item::StreamItem;
pub use self::subject::{Subject, SubjectStream};
pub use self::subject_error::SubjectError;
