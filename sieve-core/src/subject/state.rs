// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StreamItem;
use async_channel::Sender;

/// `None` once the subject is closed; dropping the senders ends every receiver.
pub(super) struct SubjectState<T, E> {
    subscribers: Option<Vec<Sender<StreamItem<T, E>>>>,
}

impl<T: Clone, E: Clone> SubjectState<T, E> {
    pub(super) const fn new() -> Self {
        Self {
            subscribers: Some(Vec::new()),
        }
    }

    pub(super) fn subscribers_mut(&mut self) -> Option<&mut Vec<Sender<StreamItem<T, E>>>> {
        self.subscribers.as_mut()
    }

    pub(super) fn close(&mut self) {
        self.subscribers = None;
    }

    pub(super) const fn is_closed(&self) -> bool {
        self.subscribers.is_none()
    }

    pub(super) fn len(&self) -> usize {
        self.subscribers.as_ref().map_or(0, Vec::len)
    }
}

/// Delivers `item` to every live subscriber, forgetting the ones that went away.
pub(super) fn broadcast<T: Clone, E: Clone>(
    subscribers: &mut Vec<Sender<StreamItem<T, E>>>,
    item: &StreamItem<T, E>,
) {
    subscribers.retain(|tx| tx.try_send(item.clone()).is_ok());
}
