//! Custom error types for the flights service

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors surfaced to API callers
///
/// The display text of each variant is exactly what the caller receives, so
/// none of them may carry storage details.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The creation payload failed validation
    #[error("Invalid flight model")]
    InvalidModel(ValidationErrors),

    /// No flight with the requested identifier
    #[error("Flight {0} not found")]
    NotFound(i32),

    /// The data store rejected a write
    #[error("Failed to save flight")]
    SaveFailed,

    /// Unclassified failure while handling a single flight
    #[error("An internal error occurred")]
    Internal,

    /// Unclassified failure while listing flights
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidModel(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::SaveFailed | ApiError::Internal | ApiError::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add("$", rejection.body_text());
        ApiError::InvalidModel(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match self {
            ApiError::InvalidModel(errors) => {
                let body = Json(json!({
                    "error": message,
                    "errors": errors,
                }));
                (status, body).into_response()
            }
            _ => (status, Json(message)).into_response(),
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
