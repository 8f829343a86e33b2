use axum::{
    Json,
    extract::Extension,
    http::{StatusCode, Uri},
    response::IntoResponse,
};

use eventgate_dashboard::{Navigation, Route};

use crate::app::state::AppState;
use crate::app::{dto, errors};

/// Render any navigation path, or redirect where the guard says.
pub async fn page(Extension(state): Extension<AppState>, uri: Uri) -> axum::response::Response {
    let mut dashboard = state.lock();

    let nav = match dashboard.navigate(uri.path()) {
        Ok(nav) => nav,
        Err(e) => return errors::dashboard_error_to_response(e),
    };
    if let Some(location) = nav.first_redirect() {
        return errors::see_other(location);
    }

    match dashboard.page() {
        Ok(page) => {
            let status = if page.route == Route::NotFound {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (status, Json(page)).into_response()
        }
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

pub async fn back(Extension(state): Extension<AppState>) -> axum::response::Response {
    let result = state.lock().back();
    history_response(result)
}

pub async fn forward(Extension(state): Extension<AppState>) -> axum::response::Response {
    let result = state.lock().forward();
    history_response(result)
}

fn history_response(
    result: Result<Option<Navigation>, eventgate_dashboard::DashboardError>,
) -> axum::response::Response {
    match result {
        Ok(Some(nav)) => (StatusCode::OK, Json(dto::navigation_to_json(&nav))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "no_history_entry", "no history entry in that direction"),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}
