use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Estimation
        .route("/api/v1/estimate", post(handlers::handle_estimate))
        .route("/api/v1/measure", post(handlers::handle_measure))
        .route("/api/v1/export", post(handlers::handle_export))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
