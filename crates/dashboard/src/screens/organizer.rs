//! Organizer screens: own events and the event creation form.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use eventgate_catalog::{Event, EventStatus, ReferenceData};
use eventgate_core::{EventId, UserId};

use crate::Notification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub price: u64,
    pub sold: u32,
    pub capacity: u32,
    pub fill_percent: u32,
    pub status: EventStatus,
}

impl EventCard {
    pub fn new(event: &Event, today: NaiveDate) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            date: event.date,
            time: event.time,
            venue: event.venue.clone(),
            price: event.price,
            sold: event.sold,
            capacity: event.capacity,
            fill_percent: event.fill_percent(),
            status: event.status(today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizerEventsView {
    pub events: Vec<EventCard>,
}

impl OrganizerEventsView {
    /// Events owned by `organizer`, in catalog order.
    pub fn new(reference: &dyn ReferenceData, organizer: UserId, today: NaiveDate) -> Self {
        let events = reference
            .events_by_organizer(organizer)
            .into_iter()
            .map(|e| EventCard::new(e, today))
            .collect();
        Self { events }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("le champ '{0}' est obligatoire")]
    MissingField(&'static str),

    #[error("date invalide '{0}' (attendu AAAA-MM-JJ)")]
    InvalidDate(String),

    #[error("heure invalide '{0}' (attendu HH:MM)")]
    InvalidTime(String),

    #[error("prix invalide '{0}'")]
    InvalidPrice(String),

    #[error("capacité invalide '{0}' (minimum 1)")]
    InvalidCapacity(String),
}

/// Raw create-event form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub description: String,
    pub price: String,
    pub capacity: String,
    pub image: String,
}

/// A validated event that has not been persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub organizer_id: UserId,
    pub description: Option<String>,
    pub price: u64,
    pub capacity: u32,
    pub image: Option<String>,
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl EventForm {
    pub fn validate(&self, organizer: UserId) -> Result<EventDraft, FormError> {
        let name = required("name", &self.name)?;
        let venue = required("venue", &self.venue)?;
        let date = required("date", &self.date)?;
        let time = required("time", &self.time)?;
        let price = required("price", &self.price)?;
        let capacity = required("capacity", &self.capacity)?;

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(date.to_string()))?;
        let time = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| FormError::InvalidTime(time.to_string()))?;
        let price: u64 = price
            .parse()
            .map_err(|_| FormError::InvalidPrice(price.to_string()))?;
        let capacity = capacity
            .parse::<u32>()
            .ok()
            .filter(|c| *c >= 1)
            .ok_or_else(|| FormError::InvalidCapacity(capacity.to_string()))?;

        Ok(EventDraft {
            name: name.to_string(),
            date,
            time,
            venue: venue.to_string(),
            organizer_id: organizer,
            description: optional(&self.description),
            price,
            capacity,
            image: optional(&self.image),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEventView {
    pub form: EventForm,
    pub cancel_path: &'static str,
}

impl CreateEventView {
    pub fn new(form: &EventForm) -> Self {
        Self {
            form: form.clone(),
            cancel_path: crate::routes::ORGANIZER_EVENTS_PATH,
        }
    }
}

pub fn created_notification(draft: &EventDraft) -> Notification {
    Notification::info(
        "Événement créé avec succès",
        format!("L'événement \"{}\" a été créé.", draft.name),
    )
}

pub fn rejected_notification(err: &FormError) -> Notification {
    Notification::destructive("Erreur", err.to_string())
}
