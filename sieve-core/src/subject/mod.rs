// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber push source for sieve pipelines.
//!
//! A [`Subject`] broadcasts each [`StreamItem<T, E>`](crate::StreamItem) to all active
//! subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers only receive items sent after subscribing.
//! - **Unbounded**: each subscriber owns an unbounded FIFO channel.
//! - **Serialised**: sends from any number of threads are applied one at a time under
//!   a single lock, so every subscriber observes the same total order.
//! - **Terminal signals**: [`error`](Subject::error) sends the failure and closes;
//!   [`close`](Subject::close) completes every subscriber stream.
//! - **Cancellation**: a subscriber that drops its stream is pruned on the next send.
//!
//! ## Example
//!
//! ```
//! use sieve_core::{StreamItem, Subject};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//! let mut stream = subject.subscribe().unwrap();
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(StreamItem::Value(1)));
//! assert_eq!(stream.next().await, Some(StreamItem::Value(2)));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

mod state;

use crate::error::SieveError;
use crate::{StreamItem, SubjectError};
use async_channel::Sender;
use core::pin::Pin;
use futures::Stream;
use parking_lot::Mutex;
use state::{broadcast, SubjectState};
use std::sync::Arc;

/// Stream handed out by [`Subject::subscribe`].
pub type SubjectStream<T, E = SieveError> =
    Pin<Box<dyn Stream<Item = StreamItem<T, E>> + Send + Sync + 'static>>;

/// A hot, unbounded subject that broadcasts items to all current subscribers.
///
/// See the [module documentation](crate::subject) for details.
pub struct Subject<T, E = SieveError> {
    state: Arc<Mutex<SubjectState<T, E>>>,
}

impl<T, E> Subject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState::new())),
        }
    }

    /// Runs `f` on the subscriber list under the lock, unless the subject is closed.
    fn while_open<R>(
        &self,
        f: impl FnOnce(&mut Vec<Sender<StreamItem<T, E>>>) -> R,
    ) -> Result<R, SubjectError> {
        let mut state = self.state.lock();
        state.subscribers_mut().map(f).ok_or(SubjectError::Closed)
    }

    /// Subscribe and receive every item sent from now on.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T, E>, SubjectError> {
        let (tx, rx) = async_channel::unbounded();
        self.while_open(|subscribers| subscribers.push(tx))?;
        Ok(Box::pin(rx))
    }

    /// Send an item to all active subscribers.
    ///
    /// An `Error` item does not close the subject; use [`error`](Self::error) for that.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, item: StreamItem<T, E>) -> Result<(), SubjectError> {
        self.while_open(|subscribers| broadcast(subscribers, &item))
    }

    /// Send a value to all active subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Send a terminal error to all subscribers and close the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already been closed.
    pub fn error(&self, error: E) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        let subscribers = state.subscribers_mut().ok_or(SubjectError::Closed)?;
        broadcast(subscribers, &StreamItem::Error(error));
        state.close();
        Ok(())
    }

    /// Completes every subscriber stream. Idempotent.
    pub fn close(&self) {
        self.state.lock().close();
    }

    /// Returns `true` once the subject has been closed or errored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().is_closed()
    }

    /// Number of subscribers still attached.
    ///
    /// Dropped subscribers are pruned lazily on the next send.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().len()
    }
}

impl<T, E> Default for Subject<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Subject<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
