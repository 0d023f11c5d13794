use std::sync::Arc;

use axum::{routing::get, Router};

use db::Db;

use tower::ServiceBuilder;

use crate::appstate::AppState;

pub mod advice;
pub mod appstate;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod model;

pub fn router(db: Db) -> Router {
    router_with_state(Arc::new(AppState::new(db)))
}

/// Builds the router around an existing state, e.g. one carrying a custom
/// exception-handler registry.
pub fn router_with_state(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/users",
            get(crate::handlers::user::find_all).post(crate::handlers::user::insert),
        )
        .route(
            "/users/:id",
            get(crate::handlers::user::find_by_id)
                .put(crate::handlers::user::update)
                .delete(crate::handlers::user::delete),
        )
        .fallback(crate::handlers::path_not_found::handler_404)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(
                    crate::middleware::request_tracing::request_tracing,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    app_state.clone(),
                    crate::middleware::exception_advice::exception_advice,
                )),
        )
        .with_state(app_state)
}
