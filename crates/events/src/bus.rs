//! Publish/subscribe seam.
//!
//! Delivery is synchronous: a notification is queued on every live
//! subscription before `publish` returns.

use std::sync::mpsc::Receiver;

/// Queue of notifications for one consumer.
#[derive(Debug)]
pub struct Subscription<M> {
    queue: Receiver<M>,
}

impl<M> Subscription<M> {
    pub(crate) fn new(queue: Receiver<M>) -> Self {
        Self { queue }
    }

    /// Everything queued so far, oldest first. Never blocks.
    pub fn drain(&self) -> Vec<M> {
        self.queue.try_iter().collect()
    }
}

pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + core::fmt::Display + Send + Sync + 'static;

    /// Returns how many subscriptions received `message`.
    fn publish(&self, message: M) -> Result<usize, Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
