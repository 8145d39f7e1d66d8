pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// This structure is returned for all error responses, providing consistent
/// error information to clients including
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Material m009 not found",
///   "details": null
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Build a response body from an error code with a specific message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// This enum integrates with common error types from dependencies
/// and provides structured error responses with error codes for observability.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, code) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(
                    error_code = ErrorCode::SerdeJsonError.code(),
                    "JSON parsing error: {:?}",
                    e
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::SerdeJsonError.default_message().to_string(),
                    None,
                    ErrorCode::SerdeJsonError,
                )
            }
            AppError::Io(e) => {
                tracing::error!(error_code = ErrorCode::IoError.code(), "I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::IoError.default_message().to_string(),
                    None,
                    ErrorCode::IoError,
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text(), None, ErrorCode::JsonExtraction)
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::json!(null))),
                    ErrorCode::ValidationError,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, None, ErrorCode::ValidationError)
            }
            AppError::InvalidRange(msg) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidRange.code(),
                    "Invalid range: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, msg, None, ErrorCode::InvalidRange)
            }
            AppError::InvalidQuantity(msg) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidQuantity.code(),
                    "Invalid quantity: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, msg, None, ErrorCode::InvalidQuantity)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, None, ErrorCode::NotFound)
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg, None, ErrorCode::Conflict)
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::info!("Unprocessable entity: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    msg,
                    None,
                    ErrorCode::UnprocessableEntity,
                )
            }
            AppError::Storage(msg) => {
                tracing::error!(
                    error_code = ErrorCode::StorageError.code(),
                    "Storage error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageError.default_message().to_string(),
                    None,
                    ErrorCode::StorageError,
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg,
                    None,
                    ErrorCode::InternalError,
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    msg,
                    None,
                    ErrorCode::ServiceUnavailable,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Helper function to create error responses.
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse::new(error_code, message));
    (status, body).into_response()
}
