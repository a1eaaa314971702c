//! Axum route handler for the Analysis API.

use axum::{extract::State, Json};
use validator::Validate;

use crate::analysis::{analyze, AnalysisRequest, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Scores a resume against a job description. Exactly one model call per
/// request; length validation short-circuits before the model is reached.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    request
        .validate()
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

    let result = analyze(&request, state.generator.as_ref()).await?;

    Ok(Json(result))
}
