//! In-process change notifications.
//!
//! The session store publishes logins and logouts here; each dashboard holds
//! a subscription and drains it before every transition.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
