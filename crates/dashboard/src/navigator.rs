//! Path resolution and history.
//!
//! Every navigation (direct entry, link, back, forward, session change) goes
//! through [`resolve`], so the guard runs on each of them.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use eventgate_auth::{DASHBOARD_PATH, LOGIN_PATH, Session, authorize_explained};

use crate::redirect::landing_path_for;
use crate::routes::{Route, normalize_path};

/// Upper bound on redirect hops for one navigation.
pub const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("redirect loop while resolving '{path}'")]
    RedirectLoop { path: String },
}

/// Result of resolving a path: where the user ends up and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub requested: String,
    pub location: String,
    /// Redirect targets in the order they were followed.
    pub redirects: Vec<String>,
    pub route: Route,
}

impl Navigation {
    pub fn redirected(&self) -> bool {
        !self.redirects.is_empty()
    }

    pub fn first_redirect(&self) -> Option<&str> {
        self.redirects.first().map(String::as_str)
    }
}

enum Step {
    Render(Route),
    Redirect(&'static str),
}

fn step(route: Route, session: &Session) -> Step {
    match route {
        Route::Login if session.is_authenticated() => Step::Redirect(DASHBOARD_PATH),
        Route::Login | Route::NotFound => Step::Render(route),
        Route::Root if session.is_authenticated() => Step::Redirect(DASHBOARD_PATH),
        Route::Root => Step::Redirect(LOGIN_PATH),
        Route::Dashboard => match (authorize_explained(session, &[]), session.role()) {
            (Ok(()), Some(role)) => Step::Redirect(landing_path_for(role)),
            (Err(denial), _) => Step::Redirect(denial.redirect_path()),
            (Ok(()), None) => Step::Redirect(LOGIN_PATH),
        },
        guarded => match authorize_explained(session, guarded.required_roles()) {
            Ok(()) => Step::Render(guarded),
            Err(denial) => {
                debug!(route = ?guarded, %denial, "guard redirect");
                Step::Redirect(denial.redirect_path())
            }
        },
    }
}

/// Resolve `path` against `session`, following redirects.
pub fn resolve(path: &str, session: &Session) -> Result<Navigation, NavigationError> {
    let requested = normalize_path(path);
    let mut location = requested.clone();
    let mut redirects = Vec::new();

    for _ in 0..=MAX_REDIRECTS {
        match step(Route::from_path(&location), session) {
            Step::Render(route) => {
                return Ok(Navigation {
                    requested,
                    location,
                    redirects,
                    route,
                });
            }
            Step::Redirect(next) => {
                redirects.push(next.to_string());
                location = next.to_string();
            }
        }
    }

    Err(NavigationError::RedirectLoop { path: requested })
}

/// Browser-like history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Oldest entries are dropped beyond this length.
    pub const MAX_ENTRIES: usize = 64;

    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Add an entry after the current one, discarding any forward entries.
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        let overflow = self.entries.len().saturating_sub(Self::MAX_ENTRIES);
        self.entries.drain(..overflow);
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry (redirects do not grow the stack).
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.cursor] = path.into();
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventgate_auth::{CredentialStore, Role};

    fn session_as(role: Role) -> Session {
        let (email, password) = eventgate_auth::seed::demo_credentials(role);
        Session::authenticated(CredentialStore::demo().authenticate(email, password).unwrap())
    }

    fn guarded_paths() -> Vec<&'static str> {
        Route::all_paths()
            .filter(|p| Route::from_path(p).is_guarded())
            .collect()
    }

    #[test]
    fn anonymous_user_is_sent_to_login_from_every_guarded_path() {
        for path in guarded_paths() {
            let nav = resolve(path, &Session::anonymous()).unwrap();
            assert_eq!(nav.location, LOGIN_PATH, "from {path}");
            assert_eq!(nav.first_redirect(), Some(LOGIN_PATH));
            assert_eq!(nav.route, Route::Login);
        }
    }

    #[test]
    fn dashboard_forwards_to_role_landing_screen() {
        for role in Role::ALL {
            let nav = resolve(DASHBOARD_PATH, &session_as(role)).unwrap();
            assert_eq!(nav.location, landing_path_for(role));
            assert_eq!(nav.redirects, vec![landing_path_for(role).to_string()]);
        }
    }

    #[test]
    fn foreign_role_screen_goes_through_dashboard() {
        let nav = resolve("/admin/users", &session_as(Role::Organizer)).unwrap();
        assert_eq!(nav.first_redirect(), Some(DASHBOARD_PATH));
        assert_eq!(nav.location, "/organisateur/events");
        assert_eq!(nav.route, Route::OrganizerEvents);
    }

    #[test]
    fn mismatched_roles_never_render_the_requested_screen() {
        for role in Role::ALL {
            let session = session_as(role);
            for path in guarded_paths() {
                let route = Route::from_path(path);
                let nav = resolve(path, &session).unwrap();
                let admitted = route.required_roles().is_empty()
                    || route.required_roles().contains(&role);
                if !admitted {
                    assert_eq!(nav.first_redirect(), Some(DASHBOARD_PATH), "{role} on {path}");
                    assert_ne!(nav.route, route);
                }
            }
        }
    }

    #[test]
    fn login_and_root_follow_authentication_state() {
        let anon = Session::anonymous();
        assert_eq!(resolve("/login", &anon).unwrap().route, Route::Login);
        assert_eq!(resolve("/", &anon).unwrap().location, LOGIN_PATH);

        let participant = session_as(Role::Participant);
        assert_eq!(resolve("/login", &participant).unwrap().location, "/participant/events");
        assert_eq!(
            resolve("/", &participant).unwrap().redirects,
            vec![
                DASHBOARD_PATH.to_string(),
                "/participant/events".to_string()
            ]
        );
    }

    #[test]
    fn unknown_paths_render_not_found_for_everyone() {
        let nav = resolve("/nowhere", &Session::anonymous()).unwrap();
        assert_eq!(nav.route, Route::NotFound);
        assert_eq!(nav.location, "/nowhere");
        assert!(!nav.redirected());
    }

    #[test]
    fn history_push_truncates_forward_entries() {
        let mut history = History::new("/a");
        history.push("/b");
        history.push("/c");
        assert_eq!(history.back(), Some("/b"));
        history.push("/d");
        assert_eq!(history.entries(), &["/a", "/b", "/d"]);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn history_back_and_forward_bounds() {
        let mut history = History::new("/a");
        assert_eq!(history.back(), None);
        history.push("/b");
        assert_eq!(history.back(), Some("/a"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("/b"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn history_replace_keeps_length() {
        let mut history = History::new("/a");
        history.push("/b");
        history.replace("/c");
        assert_eq!(history.entries(), &["/a", "/c"]);
        assert_eq!(history.current(), "/c");
    }

    #[test]
    fn history_drops_oldest_entries_past_the_cap() {
        let mut history = History::new("/0");
        for i in 1..=History::MAX_ENTRIES + 10 {
            history.push(format!("/{i}"));
        }
        assert_eq!(history.entries().len(), History::MAX_ENTRIES);
        assert_eq!(history.entries()[0], "/11");
        assert_eq!(history.current(), format!("/{}", History::MAX_ENTRIES + 10));
        assert_eq!(history.forward(), None);
    }
}
