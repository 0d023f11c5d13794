use std::sync::Arc;

use axum::{extract::State, http::Request, middleware::Next, response::Response};

use crate::{appstate::AppState, model::error::ApiError};

/// Replaces the response of any handler that failed with an [`ApiError`]
/// by the translation registered for its kind.
///
/// The path is taken from the request as it reached the router, before any
/// nesting strips a prefix. Errors with no registered translator keep the
/// response the handler produced.
pub async fn exception_advice<B>(
    State(app_state): State<Arc<AppState>>,
    req: Request<B>,
    next: Next<B>,
) -> Response {
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    let error = match response.extensions_mut().remove::<ApiError>() {
        Some(error) => error,
        None => return response,
    };

    match app_state.get_exception_handlers().translate(&error, &path) {
        Some(translated) => translated,
        None => response,
    }
}
