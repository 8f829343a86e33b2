//! Seed events and tickets.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use eventgate_core::{EventId, TicketId, UserId};

use crate::{Event, Ticket, TicketStatus};

/// A valid ticket for the urban concert.
pub const VALID_CONCERT_CODE: &str = "QR-CONCERT-001-789ABC";
/// A valid ticket for the tech conference.
pub const VALID_TECH_CODE: &str = "QR-TECH-003-456DEF";
/// A ticket that was already scanned at the door.
pub const USED_JAZZ_CODE: &str = "QR-JAZZ-002-321GHI";
/// A refunded ticket.
pub const CANCELED_CONCERT_CODE: &str = "QR-CONCERT-001-654JKL";

const ORGANIZER: UserId = UserId::new(1);
const PARTICIPANT: UserId = UserId::new(2);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn instant(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or_default()
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::new(1),
            name: "Concert Urbain Yaoundé".into(),
            date: date(2025, 8, 15),
            time: time(19, 0),
            venue: "Palais des Sports, Yaoundé".into(),
            organizer_id: ORGANIZER,
            description: Some(
                "Une soirée musicale exceptionnelle avec les meilleurs artistes urbains du Cameroun"
                    .into(),
            ),
            price: 15_000,
            capacity: 500,
            sold: 234,
            image: Some("https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800".into()),
        },
        Event {
            id: EventId::new(2),
            name: "Festival Jazz Douala".into(),
            date: date(2025, 9, 22),
            time: time(20, 30),
            venue: "Centre Culturel, Douala".into(),
            organizer_id: ORGANIZER,
            description: Some("Festival de jazz avec des musiciens internationaux et locaux".into()),
            price: 20_000,
            capacity: 300,
            sold: 89,
            image: Some("https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800".into()),
        },
        Event {
            id: EventId::new(3),
            name: "Conférence Tech Cameroun".into(),
            date: date(2025, 7, 10),
            time: time(9, 0),
            venue: "Hôtel Hilton, Yaoundé".into(),
            organizer_id: ORGANIZER,
            description: Some("La plus grande conférence technologique du Cameroun".into()),
            price: 50_000,
            capacity: 200,
            sold: 156,
            image: Some("https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800".into()),
        },
    ]
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: TicketId::new(1),
            event_id: EventId::new(1),
            participant_id: PARTICIPANT,
            qr_code: VALID_CONCERT_CODE.into(),
            purchased_at: instant("2025-01-15T10:30:00Z"),
            price: 15_000,
            status: TicketStatus::Valid,
        },
        Ticket {
            id: TicketId::new(2),
            event_id: EventId::new(3),
            participant_id: PARTICIPANT,
            qr_code: VALID_TECH_CODE.into(),
            purchased_at: instant("2025-01-20T14:15:00Z"),
            price: 50_000,
            status: TicketStatus::Valid,
        },
        Ticket {
            id: TicketId::new(3),
            event_id: EventId::new(2),
            participant_id: PARTICIPANT,
            qr_code: USED_JAZZ_CODE.into(),
            purchased_at: instant("2025-02-03T09:00:00Z"),
            price: 20_000,
            status: TicketStatus::Used,
        },
        Ticket {
            id: TicketId::new(4),
            event_id: EventId::new(1),
            participant_id: PARTICIPANT,
            qr_code: CANCELED_CONCERT_CODE.into(),
            purchased_at: instant("2025-02-10T18:45:00Z"),
            price: 15_000,
            status: TicketStatus::Canceled,
        },
    ]
}
