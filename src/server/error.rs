//! Facade error types.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::types::errors::StoreError;

/// Error body returned by the facade.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Request-level facade error.
#[derive(Debug)]
pub enum ApiError {
    /// A required request field is missing or null.
    MissingField(&'static str),
    /// A request field is present but unusable.
    InvalidField(&'static str, String),
    /// The storage layer failed.
    Store(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingField(field) => write!(f, "missing {}", field),
            ApiError::InvalidField(field, msg) => write!(f, "invalid {}: {}", field, msg),
            ApiError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Store(e)
    }
}

impl ApiError {
    /// Error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingField(_) => "missing_field",
            ApiError::InvalidField(..) => "invalid_field",
            ApiError::Store(StoreError::Busy(_)) => "storage_busy",
            ApiError::Store(StoreError::Unavailable(_)) => "storage_unavailable",
            ApiError::Store(StoreError::Constraint(_)) => "constraint_violation",
            ApiError::Store(StoreError::Query(_)) => "storage_error",
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) | ApiError::InvalidField(..) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Busy(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(StoreError::Constraint(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Unavailable(_)) | ApiError::Store(StoreError::Query(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for facade handlers.
pub type ApiResult<T> = Result<T, ApiError>;
