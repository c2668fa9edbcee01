//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Content cascades
        .route("/api/ai-tools", get(handlers::get_ai_tools))
        .route("/api/jobs", get(handlers::get_jobs))
        .route("/api/courses", get(handlers::get_courses))
        // Document, text and chat processing
        .route("/api/process-file", post(handlers::process_file))
        .route("/api/process-text", post(handlers::process_text))
        .route("/api/chat", post(handlers::chat))
        // Health check
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
