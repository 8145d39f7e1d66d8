use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Invalid stock quantity {0}: must not be negative")]
    InvalidQuantity(f64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type MaterialResult<T> = Result<T, MaterialError>;

/// Convert MaterialError to AppError for standardized error responses
impl From<MaterialError> for AppError {
    fn from(err: MaterialError) -> Self {
        match err {
            MaterialError::NotFound(id) => {
                AppError::NotFound(format!("Material {} not found", id))
            }
            MaterialError::InvalidQuantity(qty) => AppError::InvalidQuantity(format!(
                "stock quantity {} must not be negative",
                qty
            )),
            MaterialError::Validation(msg) => AppError::BadRequest(msg),
            MaterialError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for MaterialError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
