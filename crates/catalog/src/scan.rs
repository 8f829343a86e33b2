//! Ticket scan lookup.

use serde::Serialize;
use thiserror::Error;

use crate::{Event, ReferenceData, Ticket};

/// A ticket found by its code, joined with its event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedTicket {
    pub ticket: Ticket,
    pub event: Option<Event>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Ce billet n'existe pas dans notre système")]
    TicketNotFound,

    /// The code exists but the ticket no longer grants entry.
    #[error("Statut: {}", .0.ticket.status)]
    TicketInvalidStatus(Box<ScannedTicket>),
}

/// Find the ticket whose code equals `code` exactly.
///
/// `Ok` only for tickets with a valid status.
pub fn lookup_ticket<R>(reference: &R, code: &str) -> Result<ScannedTicket, ScanError>
where
    R: ReferenceData + ?Sized,
{
    let ticket = reference
        .tickets()
        .iter()
        .find(|t| t.qr_code == code)
        .ok_or(ScanError::TicketNotFound)?;

    let scanned = ScannedTicket {
        ticket: ticket.clone(),
        event: reference.event(ticket.event_id).cloned(),
    };

    if ticket.is_valid() {
        Ok(scanned)
    } else {
        Err(ScanError::TicketInvalidStatus(Box::new(scanned)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{CANCELED_CONCERT_CODE, USED_JAZZ_CODE, VALID_CONCERT_CODE};
    use crate::{InMemoryCatalog, TicketStatus};
    use eventgate_core::EventId;

    #[test]
    fn valid_code_returns_ticket_and_event() {
        let catalog = InMemoryCatalog::seeded();
        let scanned = lookup_ticket(&catalog, VALID_CONCERT_CODE).unwrap();
        assert_eq!(scanned.ticket.qr_code, VALID_CONCERT_CODE);
        let event = scanned.event.expect("event joined");
        assert_eq!(event.id, EventId::new(1));
        assert_eq!(event.name, "Concert Urbain Yaoundé");
    }

    #[test]
    fn unknown_code_is_not_found() {
        let catalog = InMemoryCatalog::seeded();
        assert_eq!(
            lookup_ticket(&catalog, "QR-UNKNOWN-000"),
            Err(ScanError::TicketNotFound)
        );
    }

    #[test]
    fn used_and_canceled_tickets_are_invalid() {
        let catalog = InMemoryCatalog::seeded();
        for (code, status) in [
            (USED_JAZZ_CODE, TicketStatus::Used),
            (CANCELED_CONCERT_CODE, TicketStatus::Canceled),
        ] {
            match lookup_ticket(&catalog, code) {
                Err(ScanError::TicketInvalidStatus(scanned)) => {
                    assert_eq!(scanned.ticket.status, status);
                    assert!(scanned.event.is_some());
                }
                other => panic!("expected invalid status for {code}, got {other:?}"),
            }
        }
    }

    #[test]
    fn matching_is_exact() {
        let catalog = InMemoryCatalog::seeded();
        let lower = VALID_CONCERT_CODE.to_lowercase();
        let padded = format!(" {VALID_CONCERT_CODE}");
        assert_eq!(lookup_ticket(&catalog, &lower), Err(ScanError::TicketNotFound));
        assert_eq!(lookup_ticket(&catalog, &padded), Err(ScanError::TicketNotFound));
    }

    #[test]
    fn invalid_status_message_names_the_status() {
        let catalog = InMemoryCatalog::seeded();
        let err = lookup_ticket(&catalog, USED_JAZZ_CODE).unwrap_err();
        assert_eq!(err.to_string(), "Statut: utilise");
    }
}
