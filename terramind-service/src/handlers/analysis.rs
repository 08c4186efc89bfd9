use crate::models::{AnalyzeRequest, AnalyzeResponse, Capabilities};
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

/// Main analysis endpoint. A missing or malformed body is a 400; coordinates
/// outside valid ranges are a 422.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::BadRequest(anyhow::anyhow!("No data provided: {}", e)))?;

    request.validate()?;

    let preview: String = request.query.chars().take(50).collect();
    tracing::info!(
        query = %preview,
        analysis_type = %request.analysis_type,
        lat = request.coordinates.lat,
        lng = request.coordinates.lng,
        "analysis request"
    );

    let response = state.analyzer.analyze(&request).await;
    Ok(Json(response))
}

/// Advertise what the model can consume and produce.
pub async fn capabilities(State(state): State<AppState>) -> Json<Capabilities> {
    Json(Capabilities::new(state.analyzer.model()))
}
