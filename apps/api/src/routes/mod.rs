pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::calendar::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Single-page UI
        .route("/", get(handlers::handle_index))
        .route("/generate", post(handlers::handle_generate_form))
        // JSON API
        .route("/api/v1/calendar", post(handlers::handle_generate_json))
        .route("/api/v1/options", get(handlers::handle_options))
        .with_state(state)
}
