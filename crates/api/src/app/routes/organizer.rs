use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use eventgate_dashboard::routes::{CREATE_EVENT_PATH, SCANNER_PATH};
use eventgate_dashboard::screens::EventForm;

use crate::app::state::AppState;
use crate::app::{dto, errors};
use crate::authz::enter_screen;

pub async fn create_event(
    Extension(state): Extension<AppState>,
    Json(form): Json<EventForm>,
) -> axum::response::Response {
    let mut dashboard = state.lock();
    if let Err(resp) = enter_screen(&mut dashboard, CREATE_EVENT_PATH) {
        return resp;
    }

    match dashboard.submit_event(form) {
        Ok(submission) => (StatusCode::CREATED, Json(submission)).into_response(),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

/// Start a scan, wait for it without holding the dashboard, then apply it.
pub async fn scan(
    Extension(state): Extension<AppState>,
    Json(body): Json<dto::ScanRequest>,
) -> axum::response::Response {
    let pending = {
        let mut dashboard = state.lock();
        if let Err(resp) = enter_screen(&mut dashboard, SCANNER_PATH) {
            return resp;
        }
        match dashboard.start_scan(&body.code) {
            Ok(pending) => pending,
            Err(e) => return errors::dashboard_error_to_response(e),
        }
    };

    let id = pending.id();
    let outcome = pending.wait().await;

    let finished = state.lock().finish_scan(id, outcome);
    match finished {
        Ok(report) => dto::scan_report_to_response(report),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

pub async fn reset_scan(Extension(state): Extension<AppState>) -> axum::response::Response {
    let mut dashboard = state.lock();
    if let Err(resp) = enter_screen(&mut dashboard, SCANNER_PATH) {
        return resp;
    }

    match dashboard.reset_scan() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}
