use axum::{
    Router,
    routing::{get, post},
};

pub mod admin;
pub mod navigation;
pub mod organizer;
pub mod participant;
pub mod session;
pub mod system;

/// Router for everything that goes through the dashboard.
///
/// `GET` on a navigation path renders it; paths that also take actions list
/// the page handler next to the action.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/login", get(navigation::page).post(session::login))
        .route("/login/demo/:role", get(session::demo_credentials))
        .route("/logout", post(session::logout))
        .route("/history/back", post(navigation::back))
        .route("/history/forward", post(navigation::forward))
        .route(
            "/organisateur/create-event",
            get(navigation::page).post(organizer::create_event),
        )
        .route(
            "/organisateur/scanner",
            get(navigation::page)
                .post(organizer::scan)
                .delete(organizer::reset_scan),
        )
        .route(
            "/participant/events/:id/cart",
            post(participant::add_to_cart).delete(participant::remove_from_cart),
        )
        .route("/admin/users/:id/activate", post(admin::activate_user))
        .route("/admin/users/:id/suspend", post(admin::suspend_user))
        .route("/admin/events/:id/approve", post(admin::approve_event))
        .route("/admin/events/:id/suspend", post(admin::suspend_event))
        .fallback(navigation::page)
}
