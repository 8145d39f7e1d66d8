use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid range for {field}: min {min} exceeds max {max}")]
    InvalidRange { field: String, min: f64, max: f64 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Convert SearchError to AppError for standardized error responses
impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidRange { .. } => AppError::InvalidRange(err.to_string()),
            SearchError::Validation(msg) => AppError::BadRequest(msg),
            SearchError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
