//! Demo accounts shipped with the dashboard.
//!
//! Passwords are stored and compared in plain text: this is demo data, not an
//! account system.

use eventgate_core::UserId;

use crate::{CredentialRecord, Identity, Role};

pub const ORGANIZER_EMAIL: &str = "organisateur@example.com";
pub const ORGANIZER_PASSWORD: &str = "organisateur123";
pub const PARTICIPANT_EMAIL: &str = "participant@example.com";
pub const PARTICIPANT_PASSWORD: &str = "participant123";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// The three seeded accounts, one per role.
pub fn demo_accounts() -> Vec<CredentialRecord> {
    vec![
        CredentialRecord::new(
            Identity::new(UserId::new(1), "Jean Organisateur", ORGANIZER_EMAIL, Role::Organizer),
            ORGANIZER_PASSWORD,
        ),
        CredentialRecord::new(
            Identity::new(UserId::new(2), "Marie Participante", PARTICIPANT_EMAIL, Role::Participant),
            PARTICIPANT_PASSWORD,
        ),
        CredentialRecord::new(
            Identity::new(UserId::new(3), "Admin Principal", ADMIN_EMAIL, Role::Administrator),
            ADMIN_PASSWORD,
        ),
    ]
}

/// Credentials pre-filled by the login screen's demo buttons.
pub fn demo_credentials(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Organizer => (ORGANIZER_EMAIL, ORGANIZER_PASSWORD),
        Role::Participant => (PARTICIPANT_EMAIL, PARTICIPANT_PASSWORD),
        Role::Administrator => (ADMIN_EMAIL, ADMIN_PASSWORD),
    }
}
