//! `eventgate-catalog`: read-only reference data (events and tickets).
//!
//! Screens read from here; nothing in the dashboard writes back.

pub mod event;
pub mod qr;
pub mod reference;
pub mod scan;
pub mod seed;
pub mod ticket;

pub use event::{Event, EventStatus};
pub use qr::generate_qr_code;
pub use reference::{InMemoryCatalog, ReferenceData};
pub use scan::{ScanError, ScannedTicket, lookup_ticket};
pub use ticket::{Ticket, TicketStatus};
