//! Session state: at most one authenticated identity per dashboard.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use tracing::{debug, info, warn};

use eventgate_core::UserId;
use eventgate_events::{Event, EventBus, InMemoryEventBus, Subscription};

use crate::{Identity, Role};

/// Immutable view of the session at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Change notification published by [`SessionStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn {
        identity: Identity,
        /// Identity that was signed in before, if the login replaced one.
        replaced: Option<UserId>,
    },
    LoggedOut {
        user_id: UserId,
    },
}

impl Event for SessionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::LoggedIn { .. } => "session.logged_in",
            SessionEvent::LoggedOut { .. } => "session.logged_out",
        }
    }
}

/// Observable holder of the current session.
///
/// Only [`SessionStore::login`] and [`SessionStore::logout`] mutate the state.
/// Each change is published to subscribers before the call returns.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<Session>,
    bus: InMemoryEventBus<SessionEvent>,
}

impl SessionStore {
    /// A store with no identity (process start).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign `identity` in, replacing any current identity.
    pub fn login(&self, identity: Identity) {
        let replaced = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let replaced = state.identity.as_ref().map(|i| i.id);
            *state = Session::authenticated(identity.clone());
            replaced
        };

        info!(user_id = %identity.id, role = %identity.role, "session opened");

        self.publish(SessionEvent::LoggedIn { identity, replaced });
    }

    /// Clear the session. No-op (and no notification) when already empty.
    pub fn logout(&self) {
        let previous = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.identity.take()
        };

        if let Some(identity) = previous {
            info!(user_id = %identity.id, "session closed");
            self.publish(SessionEvent::LoggedOut {
                user_id: identity.id,
            });
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.snapshot().identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    pub fn snapshot(&self) -> Session {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Receive every change made after this call.
    pub fn subscribe(&self) -> Subscription<SessionEvent> {
        self.bus.subscribe()
    }

    fn publish(&self, event: SessionEvent) {
        let kind = event.event_type();
        match self.bus.publish(event) {
            Ok(delivered) => debug!(event = kind, delivered, "session change published"),
            Err(e) => warn!(event = kind, "session change notification failed: {e}"),
        }
    }
}
