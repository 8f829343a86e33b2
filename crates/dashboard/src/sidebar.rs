use serde::Serialize;

use eventgate_auth::{Role, Session};

use crate::routes::{
    ADMIN_EVENTS_PATH, ADMIN_USERS_PATH, ORGANIZER_EVENTS_PATH, PARTICIPANT_EVENTS_PATH,
    PARTICIPANT_TICKETS_PATH, SCANNER_PATH,
};

pub const BRAND: &str = "EventGate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Navigation chrome shown next to every authenticated screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub brand: &'static str,
    pub role: Role,
    pub display_name: String,
    pub email: String,
    pub items: Vec<MenuItem>,
}

fn menu_for(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Organizer => &[
            ("Mes Événements", ORGANIZER_EVENTS_PATH),
            ("Scanner QR", SCANNER_PATH),
        ],
        Role::Participant => &[
            ("Événements", PARTICIPANT_EVENTS_PATH),
            ("Mes Billets", PARTICIPANT_TICKETS_PATH),
        ],
        Role::Administrator => &[
            ("Utilisateurs", ADMIN_USERS_PATH),
            ("Tous les Événements", ADMIN_EVENTS_PATH),
        ],
    }
}

impl Sidebar {
    /// `None` when nobody is signed in.
    pub fn for_session(session: &Session, location: &str) -> Option<Sidebar> {
        let identity = session.identity()?;
        let items = menu_for(identity.role)
            .iter()
            .map(|&(label, path)| MenuItem {
                label,
                path,
                active: path == location,
            })
            .collect();

        Some(Sidebar {
            brand: BRAND,
            role: identity.role,
            display_name: identity.display_name.clone(),
            email: identity.email.clone(),
            items,
        })
    }
}
