// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the sieve streaming library
//!
//! [`SieveError`] is the default error carried by [`StreamItem`](crate::StreamItem).
//! Operators never translate errors: whatever error type a stream carries is the
//! error type its consumers observe. `SieveError` exists for callers that do not
//! want to define their own.
//!
//! # Examples
//!
//! ```
//! use sieve_core::{Result, SieveError};
//!
//! fn compare_versions(a: &str, b: &str) -> Result<bool> {
//!     if a.is_empty() || b.is_empty() {
//!         return Err(SieveError::comparator_error("empty version string"));
//!     }
//!     Ok(a == b)
//! }
//!
//! assert!(compare_versions("1.0", "1.0").unwrap());
//! assert!(compare_versions("", "1.0").is_err());
//! ```

/// Root error type for sieve pipelines
#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    /// Stream processing encountered an error
    ///
    /// General failure raised by an upstream source.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// A deduplication comparator could not decide whether two values are equal
    #[error("Comparator error: {context}")]
    ComparatorError {
        /// Description of why the comparison failed
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided functions and callbacks.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SieveError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a comparator error with the given context
    pub fn comparator_error(context: impl Into<String>) -> Self {
        Self::ComparatorError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the error was raised by a comparator.
    #[must_use]
    pub const fn is_comparator_error(&self) -> bool {
        matches!(self, Self::ComparatorError { .. })
    }
}

/// Specialized Result type for sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

impl Clone for SieveError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::ComparatorError { context } => Self::ComparatorError {
                context: context.clone(),
            },
            // Boxed user errors cannot be cloned; keep the message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}
