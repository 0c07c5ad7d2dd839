use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;

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

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "ANALYSIS_IN_PROGRESS", msg.clone()),
            AppError::Analysis(e) => match e {
                AnalysisError::Configuration(_) => {
                    tracing::error!("Analysis unavailable: {e}");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "ANALYSIS_UNAVAILABLE",
                        "Resume analysis is not available right now".to_string(),
                    )
                }
                AnalysisError::ResponseFormat(_) | AnalysisError::ResponseShape(_) => (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_RESPONSE_INVALID",
                    e.to_string(),
                ),
                AnalysisError::BackendCall(_) => (
                    StatusCode::BAD_GATEWAY,
                    "ANALYSIS_BACKEND_FAILED",
                    "Failed to analyze resume. Please check your connection and try again."
                        .to_string(),
                ),
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
