//! Bounded, non-blocking action queue.
//!
//! Producer side of the worker pattern: the scheduling loop and the UI push
//! actions here, the single execution worker consumes them through the
//! paired receiver. The queue deliberately drops over stalling: a full
//! queue rejects the action immediately so the real-time scheduler is never
//! paused.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use battle_core::Action;

use crate::error::EnqueueError;

/// Bounded FIFO of pending battle actions.
///
/// Closing the queue drops the internal sender: the worker drains whatever
/// is still buffered and then observes end-of-stream, which matches the
/// "closed and drained" shutdown condition.
pub struct ActionQueue {
    tx: Mutex<Option<mpsc::Sender<Action>>>,
    capacity: usize,
}

impl ActionQueue {
    /// Creates a queue with the given capacity, returning the consumer
    /// endpoint for the execution worker. A capacity of zero is bumped to
    /// one: the underlying channel requires a nonzero buffer.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Action>) {
        let capacity = capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        (
            Self {
                tx: Mutex::new(Some(tx)),
                capacity,
            },
            rx,
        )
    }

    /// Attempts to enqueue without ever blocking.
    ///
    /// A full or closed queue rejects the action immediately; the action is
    /// dropped, not retried.
    pub fn enqueue(&self, action: Action) -> Result<(), EnqueueError> {
        let guard = self.lock();
        let Some(tx) = guard.as_ref() else {
            return Err(EnqueueError::Closed);
        };
        tx.try_send(action).map_err(|err| match err {
            TrySendError::Full(_) => EnqueueError::Full,
            TrySendError::Closed(_) => EnqueueError::Closed,
        })
    }

    /// Closes the queue. Idempotent; later enqueues return
    /// [`EnqueueError::Closed`].
    pub fn close(&self) {
        self.lock().take();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Number of actions currently buffered (0 once closed).
    pub fn len(&self) -> usize {
        self.lock()
            .as_ref()
            .map_or(0, |tx| self.capacity - tx.capacity())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, Option<mpsc::Sender<Action>>> {
        self.tx.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
