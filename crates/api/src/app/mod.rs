//! HTTP API application wiring (Axum router + dashboard state).
//!
//! This folder is structured like:
//! - `state.rs`: the shared dashboard behind a mutex
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use eventgate_dashboard::{Dashboard, DashboardError};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Result<Router, DashboardError> {
    let dashboard = Dashboard::demo(config.dashboard())?;
    Ok(build_app_with(AppState::new(dashboard)))
}

/// Router over an existing dashboard.
pub fn build_app_with(state: AppState) -> Router {
    let dashboard_routes = routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(state.clone()))
            .layer(axum::middleware::from_fn_with_state(
                state,
                middleware::session_context,
            )),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(dashboard_routes)
}
