// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Downstream consumers for sieve pipelines.
//!
//! [`SubscribeExt::subscribe`] drives a stream to its end, awaiting the handler
//! for every value before pulling the next, and reports how the stream ended as
//! a [`Termination`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod flow;
pub mod subscribe;

// Re-export commonly used types
pub use flow::{Flow, Termination};
pub use subscribe::SubscribeExt;
