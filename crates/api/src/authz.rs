//! Screen guard for action routes.
//!
//! Every action belongs to a screen. The action runs only if navigating to
//! that screen renders it; otherwise the client gets the guard's redirect.

use axum::response::Response;

use eventgate_dashboard::Dashboard;

use crate::app::errors;

/// Navigate to `path`, or answer with the redirect the guard chose.
pub fn enter_screen(dashboard: &mut Dashboard, path: &str) -> Result<(), Response> {
    let nav = dashboard
        .navigate(path)
        .map_err(errors::dashboard_error_to_response)?;

    match nav.first_redirect() {
        Some(location) => Err(errors::see_other(location)),
        None => Ok(()),
    }
}
