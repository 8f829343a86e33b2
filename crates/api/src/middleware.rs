use axum::{extract::State, middleware::Next, response::Response};
use tracing::debug;

use crate::app::state::AppState;
use crate::context::SessionContext;

/// Attach a [`SessionContext`] to the request.
pub async fn session_context(
    State(state): State<AppState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let session = state.session();

    debug!(
        method = %req.method(),
        path = req.uri().path(),
        authenticated = session.is_authenticated(),
        "request"
    );

    req.extensions_mut().insert(SessionContext::new(session));
    next.run(req).await
}
