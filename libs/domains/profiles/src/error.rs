use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Print profile not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Convert ProfileError to AppError for standardized error responses
impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(id) => {
                AppError::NotFound(format!("Print profile {} not found", id))
            }
            ProfileError::Validation(msg) => AppError::BadRequest(msg),
            ProfileError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
