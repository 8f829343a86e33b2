use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde_json::json;

use eventgate_catalog::ScanError;
use eventgate_core::DomainError;
use eventgate_dashboard::screens::{CartError, ScanTaskError};
use eventgate_dashboard::{DashboardError, NavigationError};

pub fn dashboard_error_to_response(err: DashboardError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DashboardError::Navigation(NavigationError::RedirectLoop { .. }) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "redirect_loop", message)
        }
        DashboardError::WrongScreen { .. } => json_error(StatusCode::CONFLICT, "wrong_screen", message),
        DashboardError::NotSignedIn => json_error(StatusCode::UNAUTHORIZED, "unauthenticated", message),
        DashboardError::Auth(_) => json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", message),
        DashboardError::Form(_) => json_error(StatusCode::BAD_REQUEST, "validation_error", message),
        DashboardError::Cart(CartError::SoldOut(_)) => json_error(StatusCode::CONFLICT, "sold_out", message),
        DashboardError::Cart(CartError::UnknownEvent(_)) => {
            json_error(StatusCode::NOT_FOUND, "not_found", message)
        }
        DashboardError::Scan(err) => scan_error_to_response(&err),
        DashboardError::ScanTask(ScanTaskError::EmptyCode) => {
            json_error(StatusCode::BAD_REQUEST, "empty_code", message)
        }
        DashboardError::ScanTask(ScanTaskError::InProgress) => {
            json_error(StatusCode::CONFLICT, "scan_in_progress", message)
        }
        DashboardError::ScanTask(ScanTaskError::Cancelled) => {
            json_error(StatusCode::CONFLICT, "scan_cancelled", message)
        }
        DashboardError::Domain(DomainError::NotFound { .. }) => {
            json_error(StatusCode::NOT_FOUND, "not_found", message)
        }
        DashboardError::Domain(DomainError::InvalidId(_)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", message)
        }
    }
}

pub fn scan_error_to_response(err: &ScanError) -> axum::response::Response {
    match err {
        ScanError::TicketNotFound => json_error(StatusCode::NOT_FOUND, "ticket_not_found", err.to_string()),
        ScanError::TicketInvalidStatus(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "ticket_invalid_status", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Guard redirect: `303 See Other` to `location`.
pub fn see_other(location: &str) -> axum::response::Response {
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location.to_string())],
        axum::Json(json!({ "location": location })),
    )
        .into_response()
}
