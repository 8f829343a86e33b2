use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventgate_core::{Entity, EventId, TicketId, UserId};

/// Ticket status. Only `Valid` tickets grant entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "valide")]
    Valid,
    #[serde(rename = "utilise")]
    Used,
    #[serde(rename = "annule")]
    Canceled,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Valid => "valide",
            TicketStatus::Used => "utilise",
            TicketStatus::Canceled => "annule",
        }
    }

    /// Label shown to participants.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Valid => "Valide",
            TicketStatus::Used => "Utilisé",
            TicketStatus::Canceled => "Annulé",
        }
    }
}

impl core::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub event_id: EventId,
    pub participant_id: UserId,
    pub qr_code: String,
    pub purchased_at: DateTime<Utc>,
    /// Price paid in XAF.
    pub price: u64,
    pub status: TicketStatus,
}

impl Ticket {
    pub fn is_valid(&self) -> bool {
        self.status == TicketStatus::Valid
    }
}

impl Entity for Ticket {
    type Id = TicketId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
