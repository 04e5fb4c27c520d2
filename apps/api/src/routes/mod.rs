pub mod analyze;
pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/analyze",
            post(analyze::analyze_handler).layer(upload_limit),
        )
        .with_state(state)
}
