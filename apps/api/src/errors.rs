use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::AnswerError;
use crate::intake::IntakeError;
use crate::models::candidate::SignalError;
use crate::workflow::WorkflowError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid candidate data: {0}")]
    Signal(#[from] SignalError),

    #[error("Invalid answers: {0}")]
    Answer(#[from] AnswerError),

    #[error("Resume intake failed: {0}")]
    Intake(#[from] IntakeError),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::Signals(e) => AppError::Signal(e),
            WorkflowError::Answers(e) => AppError::Answer(e),
            WorkflowError::MissingEmail => AppError::Validation(err.to_string()),
            WorkflowError::UnknownToken => AppError::NotFound(err.to_string()),
            WorkflowError::AlreadyCompleted => AppError::Conflict(err.to_string()),
            WorkflowError::CorruptRecord(_) => AppError::Internal(anyhow::anyhow!(err)),
            WorkflowError::Storage(e) => AppError::Internal(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Signal(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_CANDIDATE_DATA",
                e.to_string(),
            ),
            AppError::Answer(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_ANSWERS",
                e.to_string(),
            ),
            AppError::Intake(e) => intake_status(e),
            AppError::S3(msg) => {
                tracing::error!("S3 error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "S3_ERROR",
                    "A storage error occurred".to_string(),
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

fn intake_status(err: &IntakeError) -> (StatusCode, &'static str, String) {
    match err {
        IntakeError::UnsupportedFormat(_)
        | IntakeError::Pdf(_)
        | IntakeError::Encoding(_)
        | IntakeError::EmptyDocument => {
            (StatusCode::BAD_REQUEST, "INVALID_RESUME", err.to_string())
        }
        IntakeError::Llm(e) => {
            tracing::error!("LLM error: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "LLM_ERROR",
                "The resume extraction service failed".to_string(),
            )
        }
        IntakeError::Malformed(_) | IntakeError::Signals(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "EXTRACTION_FAILED",
            err.to_string(),
        ),
    }
}
