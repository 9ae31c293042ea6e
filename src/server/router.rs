use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::sync::Arc;

use crate::middleware::logging::logging_middleware;
use crate::protocol::FORM_API_PATH;
use crate::server::assets::{handle_asset, handle_index};
use crate::server::handlers::handle_form_api;
use crate::server::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(FORM_API_PATH, post(handle_form_api))
        .route("/", get(handle_index))
        .route("/{*path}", get(handle_asset))
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(axum::middleware::from_fn(logging_middleware))
        .with_state(state)
}
