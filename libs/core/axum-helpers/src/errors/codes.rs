//! Type-safe error codes for API responses.
//!
//! This module provides a single source of truth for error codes used across
//! the application. Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// This enum provides a type-safe way to represent error codes across the application.
/// It combines string identifiers (for clients), integer codes (for monitoring), and
/// default messages (for consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Supplied range bounds are inverted (min > max)
    InvalidRange,

    /// Stock quantity is negative
    InvalidQuantity,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// Request payload is semantically incorrect
    UnprocessableEntity,

    /// JSON extraction from request body failed
    JsonExtraction,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Storage errors (2000s)
    /// Opaque failure from the storage collaborator
    StorageError,

    // I/O errors (4000s)
    /// File system I/O error
    IoError,

    // JSON parsing errors (5000s)
    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    ///
    /// This returns a SCREAMING_SNAKE_CASE identifier that clients can use
    /// to programmatically handle specific error types.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidRange => "INVALID_RANGE",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::StorageError => "STORAGE_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// These codes are used in structured logs and metrics to identify error types.
    /// They are organized into ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Storage errors
    /// - 4000-4999: I/O errors
    /// - 5000-5999: Serialization errors
    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::ValidationError => 1001,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Conflict => 1008,
            Self::UnprocessableEntity => 1009,
            Self::ServiceUnavailable => 1011,
            Self::InvalidRange => 1012,
            Self::InvalidQuantity => 1013,

            // Storage errors (2000s)
            Self::StorageError => 2001,

            // I/O errors (4000s)
            Self::IoError => 4001,

            // JSON parsing errors (5000s)
            Self::SerdeJsonError => 5001,
        }
    }

    /// Get the default user-facing error message.
    ///
    /// This provides a consistent, human-readable message for each error type.
    /// Individual handlers can override these messages with more specific details.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidRange => "Range minimum exceeds maximum",
            Self::InvalidQuantity => "Stock quantity must not be negative",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::UnprocessableEntity => "Request cannot be processed",
            Self::JsonExtraction => "Failed to parse request body",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::StorageError => "Storage error occurred",
            Self::IoError => "I/O error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::InvalidRange.as_str(), "INVALID_RANGE");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::InvalidQuantity.code(), 1013);
        assert_eq!(ErrorCode::StorageError.code(), 2001);
    }

    #[test]
    fn test_error_code_messages() {
        assert_eq!(
            ErrorCode::InvalidRange.default_message(),
            "Range minimum exceeds maximum"
        );
        assert_eq!(ErrorCode::NotFound.default_message(), "Resource not found");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::InvalidQuantity.to_string(), "INVALID_QUANTITY");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidRange).unwrap();
        assert_eq!(json, "\"INVALID_RANGE\"");
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"INVALID_RANGE\"").unwrap();
        assert_eq!(code, ErrorCode::InvalidRange);
    }
}
