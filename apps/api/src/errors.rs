use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::pathway::models::PathwayShapeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API key not configured")]
    NotConfigured,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed pathway: {0}")]
    MalformedPathway(#[from] PathwayShapeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotConfigured => {
                tracing::error!("GEMINI_API_KEY is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOT_CONFIGURED",
                    "API key not configured".to_string(),
                )
            }
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                "Too many requests from this IP, please try again later.".to_string(),
            ),
            AppError::Llm(LlmError::Blocked { reason }) => (
                StatusCode::BAD_REQUEST,
                "REQUEST_BLOCKED",
                format!("Request blocked: {reason}"),
            ),
            AppError::Llm(LlmError::NoCandidates) => {
                tracing::error!("LLM error: no candidates");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NO_CANDIDATES",
                    LlmError::NoCandidates.to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "Failed to generate pathway due to an external API error.".to_string(),
                )
            }
            AppError::MalformedPathway(e) => {
                tracing::error!("Malformed generator output: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MALFORMED_PATHWAY",
                    "The generated pathway was not in the expected format.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
