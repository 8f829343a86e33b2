use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use eventgate_auth::{LOGIN_PATH, Role};

use crate::app::state::AppState;
use crate::app::{dto, errors};

pub async fn login(
    Extension(state): Extension<AppState>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let mut dashboard = state.lock();
    match dashboard.login(&body.email, &body.password) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

/// Demo credentials for a role, as the login screen's shortcut buttons fill them.
pub async fn demo_credentials(
    Extension(state): Extension<AppState>,
    Path(role): Path<String>,
) -> axum::response::Response {
    let role: Role = match role.parse() {
        Ok(role) => role,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_role", e.to_string()),
    };

    let mut dashboard = state.lock();
    if let Err(resp) = crate::authz::enter_screen(&mut dashboard, LOGIN_PATH) {
        return resp;
    }
    match dashboard.fill_demo(role) {
        Ok(form) => (
            StatusCode::OK,
            Json(json!({ "role": role, "email": form.email, "password": form.password })),
        )
            .into_response(),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

pub async fn logout(Extension(state): Extension<AppState>) -> axum::response::Response {
    let result = state.lock().logout();
    match result {
        Ok(location) => (StatusCode::OK, Json(json!({ "location": location }))).into_response(),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}
