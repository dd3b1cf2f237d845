// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Error type used by tests to check that failures reach downstream untouched.
///
/// Unlike [`SieveError`](sieve_core::SieveError) it implements `PartialEq`, so tests
/// can assert on the exact value that came out of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestFailure {
    /// Raised by a comparator that refuses to compare the given id.
    #[error("comparator refused id {0}")]
    RejectedId(u32),

    /// Raised by a test on the upstream side of a pipeline.
    #[error("upstream failed: {0}")]
    Upstream(String),
}

impl TestFailure {
    /// Shorthand for [`TestFailure::Upstream`].
    pub fn upstream(context: impl Into<String>) -> Self {
        Self::Upstream(context.into())
    }
}
