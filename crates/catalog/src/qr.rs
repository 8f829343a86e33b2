use uuid::Uuid;

use eventgate_core::{EventId, TicketId};

/// Build a ticket code: `QR-{event:03}-{ticket:03}-{6 random uppercase chars}`.
///
/// Codes are identifiers only; they carry no signature.
pub fn generate_qr_code(ticket_id: TicketId, event_id: EventId) -> String {
    // The tail of a v7 UUID is random.
    let random = Uuid::now_v7().simple().to_string().to_uppercase();
    let suffix = &random[random.len() - 6..];
    format!("QR-{:03}-{:03}-{}", event_id.get(), ticket_id.get(), suffix)
}
