use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::prompt::{PromptError, SchemaError};
use crate::screening::pdf::PdfError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or unusable input, reported before any remote call.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Model reply did not match the response schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", e.to_string())
            }
            AppError::Schema(e) => {
                tracing::warn!("Schema mismatch: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "SCHEMA_MISMATCH",
                    e.to_string(),
                )
            }
            AppError::Pdf(e) => {
                tracing::warn!("PDF error: {e}");
                (StatusCode::UNPROCESSABLE_ENTITY, "PDF_ERROR", e.to_string())
            }
            AppError::Prompt(e) => {
                tracing::error!("Prompt error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROMPT_ERROR",
                    "A prompt template could not be rendered".to_string(),
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
