use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::errors;
use crate::context::SessionContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(session): Extension<SessionContext>) -> axum::response::Response {
    match session.identity() {
        Some(identity) => (StatusCode::OK, Json(identity.clone())).into_response(),
        None => errors::json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "no active session"),
    }
}
