//! Health endpoint.

use axum::extract::State;
use axum::response::IntoResponse;

use super::super::AppState;

/// Health check, reporting whether the model credential is present.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "gemini_configured": state.gemini.is_configured(),
    }))
}
