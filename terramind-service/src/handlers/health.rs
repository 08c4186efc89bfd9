use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

/// Liveness probe. Reports the configured mode, not whether the last
/// analysis fell back.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "model": state.analyzer.model(),
        "mode": state.analyzer.mode(),
        "model_loaded": state.analyzer.model_loaded(),
        "timestamp": Utc::now(),
    }))
}

/// Readiness probe: in production mode, checks the inference provider.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.analyzer.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
