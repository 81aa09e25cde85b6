use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::skills::SkillListError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid skill list: {0}")]
    InvalidSkillList(#[from] SkillListError),

    /// Upload extraction or parsing failed. Only `message` reaches the client;
    /// the cause is logged.
    #[error("{message}: {cause}")]
    UploadFailed {
        message: &'static str,
        cause: anyhow::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn upload_failed<E>(message: &'static str, cause: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        AppError::UploadFailed {
            message,
            cause: cause.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidSkillList(e) => (
                StatusCode::BAD_REQUEST,
                "INVALID_SKILL_LIST",
                e.to_string(),
            ),
            AppError::UploadFailed { message, cause } => {
                tracing::error!("{message}: {cause:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPLOAD_FAILED",
                    message.to_string(),
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
