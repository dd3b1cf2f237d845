// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Errors specific to subject operations.
///
/// These describe misuse of the push side (sending after a terminal signal) and are
/// returned to the caller, never injected into the stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new items or subscribers.
    #[error("Subject is closed")]
    Closed,
}
