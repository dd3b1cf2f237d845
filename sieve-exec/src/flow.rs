// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Acknowledgement returned by a subscriber's handler for each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// The value was handled; pull the next one.
    #[default]
    Continue,
    /// Stop the subscription. The upstream is dropped without being read again.
    Stop,
}

impl Flow {
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// How a subscription ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination<E> {
    /// The stream ended normally.
    Completed,
    /// The stream ended with this error, delivered exactly as it was produced.
    Failed(E),
    /// The subscriber stopped early, via its token or by returning [`Flow::Stop`].
    Cancelled,
}

impl<E> Termination<E> {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The terminal error, if the stream failed.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Completed | Self::Cancelled => None,
        }
    }

    /// Converts to a `Result`, treating cancellation as success.
    ///
    /// # Errors
    ///
    /// Returns the terminal error if the stream failed.
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Self::Failed(error) => Err(error),
            Self::Completed | Self::Cancelled => Ok(()),
        }
    }
}
