// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Verdict of comparing a candidate value against the last emitted value.
///
/// Comparators used by the deduplication operators return this instead of a
/// plain `bool` so that they can abort the stream. The failure reason is
/// forwarded downstream verbatim as the stream's terminal error.
///
/// # Examples
///
/// ```
/// use sieve_core::ComparisonOutcome;
///
/// let equal: ComparisonOutcome<String> = ComparisonOutcome::from_equality(true);
/// assert!(equal.is_equal());
///
/// let failed: ComparisonOutcome<String> = Err("not comparable".to_string()).into();
/// assert_eq!(failed.failure(), Some("not comparable".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOutcome<E> {
    /// The candidate duplicates the last emitted value and is suppressed.
    Equal,
    /// The candidate differs and is emitted.
    NotEqual,
    /// The comparison could not be performed; the stream fails with this reason.
    ComparisonFailed(E),
}

impl<E> ComparisonOutcome<E> {
    /// Maps an equality verdict to `Equal` / `NotEqual`.
    #[must_use]
    pub const fn from_equality(equal: bool) -> Self {
        if equal {
            Self::Equal
        } else {
            Self::NotEqual
        }
    }

    /// Returns `true` for `Equal`.
    pub const fn is_equal(&self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns `true` for `ComparisonFailed`.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::ComparisonFailed(_))
    }

    /// Extracts the failure reason, if any.
    pub fn failure(self) -> Option<E> {
        match self {
            Self::ComparisonFailed(reason) => Some(reason),
            Self::Equal | Self::NotEqual => None,
        }
    }
}

impl<E> From<Result<bool, E>> for ComparisonOutcome<E> {
    fn from(result: Result<bool, E>) -> Self {
        match result {
            Ok(equal) => Self::from_equality(equal),
            Err(reason) => Self::ComparisonFailed(reason),
        }
    }
}
