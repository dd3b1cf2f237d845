// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic cancellation for subscriptions.

use core::future::Future;
use core::pin::{pin, Pin};
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use futures::future::{select, Either};
use std::sync::Arc;

/// Cancellation handle shared between a subscription and whoever may stop it.
///
/// Clones share the same state. Once [`cancel`](Self::cancel) is called on any
/// clone, [`is_cancelled`](Self::is_cancelled) returns `true` everywhere and every
/// [`cancelled`](Self::cancelled) future resolves.
///
/// # Example
///
/// ```
/// use sieve_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
///
/// assert!(handle.cancel());
/// assert!(!token.cancel());
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    flag: AtomicBool,
    waiters: Event,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                flag: AtomicBool::new(false),
                waiters: Event::new(),
            }),
        }
    }

    /// Cancels every clone of this token and wakes their waiters.
    ///
    /// Returns `true` for the call that actually moved the token to cancelled,
    /// `false` if it already was.
    pub fn cancel(&self) -> bool {
        if self.shared.flag.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.shared.waiters.notify(usize::MAX);
        true
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.shared.flag.load(Ordering::Acquire)
    }

    /// Resolves once the token is cancelled; immediately if it already is.
    pub fn cancelled(&self) -> WaitForCancellation<'_> {
        WaitForCancellation {
            token: self,
            listener: None,
        }
    }

    /// Drives `work` until it finishes or the token is cancelled.
    ///
    /// Returns `None` if cancellation won. Cancellation is checked first, so an
    /// already-cancelled token never polls `work`; `work` is dropped unfinished.
    pub async fn run_until_cancelled<F: Future>(&self, work: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }

        let cancelled = pin!(self.cancelled());
        let work = pin!(work);
        match select(cancelled, work).await {
            Either::Left(((), _)) => None,
            Either::Right((output, _)) => Some(output),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`CancellationToken::cancelled`].
#[must_use = "futures do nothing unless polled"]
pub struct WaitForCancellation<'a> {
    token: &'a CancellationToken,
    listener: Option<EventListener>,
}

impl Future for WaitForCancellation<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            if self.token.is_cancelled() {
                return Poll::Ready(());
            }

            // A fresh listener is registered before the flag is read again,
            // so a cancel landing in between is not missed.
            let Some(listener) = self.listener.as_mut() else {
                self.listener = Some(self.token.shared.waiters.listen());
                continue;
            };

            match Pin::new(listener).poll(cx) {
                Poll::Ready(()) => self.listener = None,
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
