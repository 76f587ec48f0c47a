use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content generation failed: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message safe to show to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Generation(msg) => format!(
                "Content generation failed: {msg}. Please verify your API key and \
                 ensure you have sufficient credits."
            ),
            AppError::Internal(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                "GENERATION_ERROR"
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "INTERNAL_ERROR"
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (self.status(), body).into_response()
    }
}
