// src/server/app.rs
//! Router construction.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/posts/{slug}", get(handlers::post_by_slug))
        .route("/pages/{page_id}", get(handlers::page_by_id))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
