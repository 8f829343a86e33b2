//! Navigation surface.

use serde::Serialize;

use eventgate_auth::{DASHBOARD_PATH, LOGIN_PATH, Role};

pub const ROOT_PATH: &str = "/";
pub const ORGANIZER_EVENTS_PATH: &str = "/organisateur/events";
pub const CREATE_EVENT_PATH: &str = "/organisateur/create-event";
pub const SCANNER_PATH: &str = "/organisateur/scanner";
pub const PARTICIPANT_EVENTS_PATH: &str = "/participant/events";
pub const PARTICIPANT_TICKETS_PATH: &str = "/participant/tickets";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_EVENTS_PATH: &str = "/admin/events";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Root,
    Login,
    Dashboard,
    OrganizerEvents,
    CreateEvent,
    Scanner,
    ParticipantEvents,
    ParticipantTickets,
    AdminUsers,
    AdminEvents,
    NotFound,
}

const TABLE: [(&str, Route); 10] = [
    (ROOT_PATH, Route::Root),
    (LOGIN_PATH, Route::Login),
    (DASHBOARD_PATH, Route::Dashboard),
    (ORGANIZER_EVENTS_PATH, Route::OrganizerEvents),
    (CREATE_EVENT_PATH, Route::CreateEvent),
    (SCANNER_PATH, Route::Scanner),
    (PARTICIPANT_EVENTS_PATH, Route::ParticipantEvents),
    (PARTICIPANT_TICKETS_PATH, Route::ParticipantTickets),
    (ADMIN_USERS_PATH, Route::AdminUsers),
    (ADMIN_EVENTS_PATH, Route::AdminEvents),
];

impl Route {
    /// Match a normalized path; anything unknown is `NotFound`.
    pub fn from_path(path: &str) -> Route {
        TABLE
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, r)| *r)
            .unwrap_or(Route::NotFound)
    }

    /// Canonical path (none for the catch-all).
    pub fn path(&self) -> Option<&'static str> {
        TABLE.iter().find(|(_, r)| r == self).map(|(p, _)| *p)
    }

    /// Roles admitted by the guard. Empty means any authenticated identity.
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Route::OrganizerEvents | Route::CreateEvent | Route::Scanner => &[Role::Organizer],
            Route::ParticipantEvents | Route::ParticipantTickets => &[Role::Participant],
            Route::AdminUsers | Route::AdminEvents => &[Role::Administrator],
            Route::Root | Route::Login | Route::Dashboard | Route::NotFound => &[],
        }
    }

    /// Routes behind the guard (everything except the public ones).
    pub fn is_guarded(&self) -> bool {
        !matches!(self, Route::Root | Route::Login | Route::NotFound)
    }

    /// Every routable path, in table order.
    pub fn all_paths() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|(p, _)| *p)
    }
}

/// Strip the query/fragment and any trailing slash; ensure a leading slash.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return ROOT_PATH.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_path_round_trips() {
        for path in Route::all_paths() {
            let route = Route::from_path(path);
            assert_ne!(route, Route::NotFound);
            assert_eq!(route.path(), Some(path));
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/organisateur"), Route::NotFound);
        assert_eq!(Route::from_path("/admin/users/3"), Route::NotFound);
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn role_screens_require_exactly_one_role() {
        assert_eq!(Route::Scanner.required_roles(), &[Role::Organizer]);
        assert_eq!(Route::ParticipantTickets.required_roles(), &[Role::Participant]);
        assert_eq!(Route::AdminEvents.required_roles(), &[Role::Administrator]);
        assert!(Route::Dashboard.required_roles().is_empty());
        assert!(Route::Dashboard.is_guarded());
        assert!(!Route::Login.is_guarded());
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/admin/users/"), "/admin/users");
        assert_eq!(normalize_path("admin/users"), "/admin/users");
        assert_eq!(normalize_path("/login?next=/admin"), "/login");
        assert_eq!(normalize_path("/participant/events#top"), "/participant/events");
    }
}
