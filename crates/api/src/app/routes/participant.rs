use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use eventgate_core::EventId;
use eventgate_dashboard::routes::PARTICIPANT_EVENTS_PATH;

use crate::app::errors;
use crate::app::state::AppState;
use crate::authz::enter_screen;

pub async fn add_to_cart(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: EventId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id"),
    };

    let mut dashboard = state.lock();
    if let Err(resp) = enter_screen(&mut dashboard, PARTICIPANT_EVENTS_PATH) {
        return resp;
    }
    match dashboard.add_to_cart(id) {
        Ok(cart) => cart_response(cart),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

pub async fn remove_from_cart(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: EventId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id"),
    };

    let mut dashboard = state.lock();
    if let Err(resp) = enter_screen(&mut dashboard, PARTICIPANT_EVENTS_PATH) {
        return resp;
    }
    match dashboard.remove_from_cart(id) {
        Ok(cart) => cart_response(cart),
        Err(e) => errors::dashboard_error_to_response(e),
    }
}

fn cart_response(cart: Vec<EventId>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({ "count": cart.len(), "cart": cart })),
    )
        .into_response()
}
