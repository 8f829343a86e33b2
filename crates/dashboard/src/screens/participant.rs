//! Participant screens: event browsing with a cart, and owned tickets.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use thiserror::Error;

use eventgate_catalog::{Event, ReferenceData, TicketStatus};
use eventgate_core::{EventId, TicketId, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Complet")]
    SoldOut(EventId),

    #[error("événement {0} introuvable")]
    UnknownEvent(EventId),
}

/// Event ids selected for purchase. Never checked out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeSet<EventId>,
}

impl Cart {
    /// Add `event` to the cart. Adding twice is a no-op.
    pub fn add(&mut self, event: &Event) -> Result<(), CartError> {
        if event.is_sold_out() {
            return Err(CartError::SoldOut(event.id));
        }
        self.items.insert(event.id);
        Ok(())
    }

    pub fn remove(&mut self, id: EventId) -> bool {
        self.items.remove(&id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.items.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<EventId> {
        self.items.iter().copied().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOffer {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub description: Option<String>,
    pub price: u64,
    pub remaining_seats: u32,
    pub sold_out: bool,
    pub in_cart: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantEventsView {
    pub events: Vec<EventOffer>,
    pub cart: Vec<EventId>,
    pub cart_count: usize,
}

impl ParticipantEventsView {
    pub fn new(reference: &dyn ReferenceData, cart: &Cart) -> Self {
        let events = reference
            .events()
            .iter()
            .map(|e| EventOffer {
                id: e.id,
                name: e.name.clone(),
                date: e.date,
                time: e.time,
                venue: e.venue.clone(),
                description: e.description.clone(),
                price: e.price,
                remaining_seats: e.remaining_seats(),
                sold_out: e.is_sold_out(),
                in_cart: cart.contains(e.id),
            })
            .collect();

        Self {
            events,
            cart: cart.ids(),
            cart_count: cart.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketCard {
    pub id: TicketId,
    pub qr_code: String,
    pub status: TicketStatus,
    pub status_label: &'static str,
    pub purchased_at: DateTime<Utc>,
    pub price: u64,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantTicketsView {
    pub tickets: Vec<TicketCard>,
}

impl ParticipantTicketsView {
    /// Tickets of `participant` whose event still exists.
    pub fn new(reference: &dyn ReferenceData, participant: UserId) -> Self {
        let tickets = reference
            .tickets_for_participant(participant)
            .into_iter()
            .filter_map(|t| {
                let event = reference.event(t.event_id)?;
                Some(TicketCard {
                    id: t.id,
                    qr_code: t.qr_code.clone(),
                    status: t.status,
                    status_label: t.status.label(),
                    purchased_at: t.purchased_at,
                    price: t.price,
                    event_name: event.name.clone(),
                    event_date: event.date,
                    event_time: event.time,
                    venue: event.venue.clone(),
                })
            })
            .collect();

        Self { tickets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventgate_catalog::{InMemoryCatalog, seed};

    #[test]
    fn cart_add_is_idempotent() {
        let catalog = InMemoryCatalog::seeded();
        let event = catalog.event(EventId::new(1)).unwrap();
        let mut cart = Cart::default();
        cart.add(event).unwrap();
        cart.add(event).unwrap();
        assert_eq!(cart.len(), 1);
        assert!(cart.contains(event.id));
        assert!(cart.remove(event.id));
        assert!(!cart.remove(event.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn sold_out_event_cannot_be_added() {
        let mut event = seed::events().remove(0);
        event.sold = event.capacity;
        let mut cart = Cart::default();
        let err = cart.add(&event).unwrap_err();
        assert_eq!(err.to_string(), "Complet");
        assert!(cart.is_empty());
    }

    #[test]
    fn offers_reflect_cart_and_seats() {
        let catalog = InMemoryCatalog::seeded();
        let mut cart = Cart::default();
        cart.add(catalog.event(EventId::new(2)).unwrap()).unwrap();
        let view = ParticipantEventsView::new(&catalog, &cart);
        assert_eq!(view.events.len(), 3);
        assert_eq!(view.cart_count, 1);
        let jazz = view.events.iter().find(|o| o.id == EventId::new(2)).unwrap();
        assert!(jazz.in_cart);
        assert_eq!(jazz.remaining_seats, 300 - 89);
    }

    #[test]
    fn tickets_without_event_are_skipped() {
        let mut tickets = seed::tickets();
        tickets[0].event_id = EventId::new(99);
        let catalog = InMemoryCatalog::new(seed::events(), tickets);
        let view = ParticipantTicketsView::new(&catalog, UserId::new(2));
        assert_eq!(view.tickets.len(), 3);
        assert!(ParticipantTicketsView::new(&catalog, UserId::new(1)).tickets.is_empty());
    }
}
