//! Reference data collaborator.

use eventgate_core::{EventId, UserId, entity::find_by_id};

use crate::{Event, Ticket};

/// Read-only access to the event and ticket collections.
pub trait ReferenceData: Send + Sync {
    fn events(&self) -> &[Event];

    fn tickets(&self) -> &[Ticket];

    fn event(&self, id: EventId) -> Option<&Event> {
        find_by_id(self.events(), id)
    }

    fn events_by_organizer(&self, organizer: UserId) -> Vec<&Event> {
        self.events()
            .iter()
            .filter(|e| e.organizer_id == organizer)
            .collect()
    }

    fn tickets_for_participant(&self, participant: UserId) -> Vec<&Ticket> {
        self.tickets()
            .iter()
            .filter(|t| t.participant_id == participant)
            .collect()
    }
}

/// Reference data held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    events: Vec<Event>,
    tickets: Vec<Ticket>,
}

impl InMemoryCatalog {
    pub fn new(events: Vec<Event>, tickets: Vec<Ticket>) -> Self {
        Self { events, tickets }
    }

    pub fn seeded() -> Self {
        Self::new(crate::seed::events(), crate::seed::tickets())
    }
}

impl ReferenceData for InMemoryCatalog {
    fn events(&self) -> &[Event] {
        &self.events
    }

    fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}
