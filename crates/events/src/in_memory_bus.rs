//! Process-local bus backed by `std::sync::mpsc` channels.

use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InMemoryBusError {
    #[error("subscriber list lock poisoned")]
    Poisoned,
}

/// Fan-out bus. Subscriptions that were dropped stop counting as soon as
/// the next message fails to reach them.
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    senders: Mutex<Vec<Sender<M>>>,
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<usize, Self::Error> {
        let mut senders = self.senders.lock().map_err(|_| InMemoryBusError::Poisoned)?;
        senders.retain(|sender| sender.send(message.clone()).is_ok());
        Ok(senders.len())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (sender, queue) = mpsc::channel();
        match self.senders.lock() {
            Ok(mut senders) => senders.push(sender),
            // Leaves a subscription that never hears anything.
            Err(_) => drop(sender),
        }
        Subscription::new(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_subscription_gets_its_own_copy() {
        let bus = InMemoryEventBus::default();
        let first = bus.subscribe();
        let second = bus.subscribe();

        assert_eq!(bus.publish("opened").unwrap(), 2);
        assert_eq!(bus.publish("closed").unwrap(), 2);

        assert_eq!(first.drain(), ["opened", "closed"]);
        assert_eq!(second.drain(), ["opened", "closed"]);
        assert!(first.drain().is_empty());
    }

    #[test]
    fn messages_before_subscribing_are_not_replayed() {
        let bus = InMemoryEventBus::default();
        assert_eq!(bus.publish(1u8).unwrap(), 0);

        let sub = bus.subscribe();
        bus.publish(2u8).unwrap();
        assert_eq!(sub.drain(), [2]);
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let bus = InMemoryEventBus::default();
        let kept = bus.subscribe();
        drop(bus.subscribe());

        assert_eq!(bus.publish('x').unwrap(), 1);
        assert_eq!(kept.drain(), ['x']);
    }
}
