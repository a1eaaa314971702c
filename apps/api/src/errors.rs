use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fixed client-facing message when the model's output fails JSON or shape
/// validation.
pub const UPSTREAM_INVALID_DETAIL: &str = "AI returned an invalid response. Please try again.";

/// Fixed client-facing message when the model call itself fails.
pub const UPSTREAM_UNAVAILABLE_DETAIL: &str =
    "AI service is temporarily unavailable. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Upstream returned invalid data: {0}")]
    UpstreamInvalid(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream failures log the server-side detail here, once, and send the
        // caller a fixed message. Validation failures carry their message
        // through unchanged.
        let (status, detail) = match &self {
            AppError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::UpstreamInvalid(msg) => {
                tracing::error!("Model returned invalid JSON: {msg}");
                (StatusCode::BAD_GATEWAY, UPSTREAM_INVALID_DETAIL.to_string())
            }
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Model call failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    UPSTREAM_UNAVAILABLE_DETAIL.to_string(),
                )
            }
        };

        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}
