use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use eventgate_dashboard::Navigation;
use eventgate_dashboard::screens::ScanReport;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub code: String,
}

// -------------------------
// Response mapping
// -------------------------

pub fn navigation_to_json(nav: &Navigation) -> serde_json::Value {
    json!({
        "requested": nav.requested,
        "location": nav.location,
        "redirects": nav.redirects,
        "route": nav.route,
    })
}

/// Valid tickets answer 200; rejected codes answer with their error status.
pub fn scan_report_to_response(report: ScanReport) -> axum::response::Response {
    let notification = report.notification();
    match report.result {
        Ok(scanned) => (
            StatusCode::OK,
            Json(json!({
                "code": report.code,
                "valid": true,
                "ticket": scanned.ticket,
                "event": scanned.event,
                "notification": notification,
            })),
        )
            .into_response(),
        Err(err) => errors::scan_error_to_response(&err),
    }
}
