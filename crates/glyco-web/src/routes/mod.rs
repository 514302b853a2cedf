//! HTTP routes for the intake API.

mod api;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/intake/assess", post(api::assess))
        .route("/api/intake/factors", post(api::factors))
        .route("/api/intake/preview", post(api::preview))
        .route("/api/intake/info", get(api::info))
        .route("/api/intake/health", get(api::intake_health))
        .route("/health", get(api::health))
        // CORS for browser front ends
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
