use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use eventgate_core::{EventId, UserId};
use eventgate_dashboard::routes::{ADMIN_EVENTS_PATH, ADMIN_USERS_PATH};
use eventgate_dashboard::screens::{EventAction, UserAction};

use crate::app::errors;
use crate::app::state::AppState;
use crate::authz::enter_screen;

pub async fn activate_user(state: Extension<AppState>, id: Path<String>) -> axum::response::Response {
    moderate_user(state, id, UserAction::Activate)
}

pub async fn suspend_user(state: Extension<AppState>, id: Path<String>) -> axum::response::Response {
    moderate_user(state, id, UserAction::Suspend)
}

pub async fn approve_event(state: Extension<AppState>, id: Path<String>) -> axum::response::Response {
    moderate_event(state, id, EventAction::Approve)
}

pub async fn suspend_event(state: Extension<AppState>, id: Path<String>) -> axum::response::Response {
    moderate_event(state, id, EventAction::Suspend)
}

fn moderate_user(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    action: UserAction,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    let mut dashboard = state.lock();
    if let Err(resp) = enter_screen(&mut dashboard, ADMIN_USERS_PATH) {
        return resp;
    }
    match dashboard.moderate_user(id, action) {
        Ok(notification) => (StatusCode::OK, Json(notification)).into_response(),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

fn moderate_event(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    action: EventAction,
) -> axum::response::Response {
    let id: EventId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id"),
    };

    let mut dashboard = state.lock();
    if let Err(resp) = enter_screen(&mut dashboard, ADMIN_EVENTS_PATH) {
        return resp;
    }
    match dashboard.moderate_event(id, action) {
        Ok(notification) => (StatusCode::OK, Json(notification)).into_response(),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}
