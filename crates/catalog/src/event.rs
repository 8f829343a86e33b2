use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use eventgate_core::{Entity, EventId, UserId};

/// Lifecycle status shown on the moderation screen. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    #[serde(rename = "actif")]
    Active,
    #[serde(rename = "complet")]
    SoldOut,
    #[serde(rename = "terminé")]
    Ended,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "actif",
            EventStatus::SoldOut => "complet",
            EventStatus::Ended => "terminé",
        }
    }
}

impl core::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ticketed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub organizer_id: UserId,
    pub description: Option<String>,
    /// Ticket price in XAF (no minor unit).
    pub price: u64,
    pub capacity: u32,
    pub sold: u32,
    pub image: Option<String>,
}

impl Event {
    pub fn remaining_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.sold)
    }

    pub fn is_sold_out(&self) -> bool {
        self.sold >= self.capacity
    }

    /// Sold share of capacity, rounded to the nearest whole percent.
    pub fn fill_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        ((f64::from(self.sold) / f64::from(self.capacity)) * 100.0).round() as u32
    }

    pub fn revenue(&self) -> u64 {
        u64::from(self.sold) * self.price
    }

    /// Past events are ended even when sold out.
    pub fn status(&self, today: NaiveDate) -> EventStatus {
        if self.date < today {
            EventStatus::Ended
        } else if self.is_sold_out() {
            EventStatus::SoldOut
        } else {
            EventStatus::Active
        }
    }
}

impl Entity for Event {
    type Id = EventId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, capacity: u32, sold: u32) -> Event {
        Event {
            id: EventId::new(1),
            name: "Test".into(),
            date: date.parse().unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            venue: "Somewhere".into(),
            organizer_id: UserId::new(1),
            description: None,
            price: 15_000,
            capacity,
            sold,
            image: None,
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn status_prefers_ended_over_sold_out() {
        let e = event("2025-01-01", 10, 10);
        assert_eq!(e.status(day("2025-06-01")), EventStatus::Ended);
        assert_eq!(e.status(day("2024-12-31")), EventStatus::SoldOut);
    }

    #[test]
    fn event_on_today_is_still_active() {
        let e = event("2025-08-15", 500, 234);
        assert_eq!(e.status(day("2025-08-15")), EventStatus::Active);
    }

    #[test]
    fn seat_math() {
        let e = event("2025-08-15", 500, 234);
        assert_eq!(e.remaining_seats(), 266);
        assert_eq!(e.fill_percent(), 47);
        assert_eq!(e.revenue(), 234 * 15_000);
        assert!(!e.is_sold_out());
    }

    #[test]
    fn oversold_event_has_no_remaining_seats() {
        let e = event("2025-08-15", 5, 7);
        assert_eq!(e.remaining_seats(), 0);
        assert!(e.is_sold_out());
    }

    #[test]
    fn zero_capacity_does_not_divide_by_zero() {
        assert_eq!(event("2025-08-15", 0, 0).fill_percent(), 0);
    }
}
