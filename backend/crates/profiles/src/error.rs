//! Profile Error Types
//!
//! This module provides profile-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::FieldError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Profile-specific error variants
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Request body failed validation (per-field messages attached)
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// The authenticated caller has not created a profile yet
    #[error("There is no profile for this user")]
    NoProfileForUser,

    /// No profile for the requested user id (or the id is not a UUID)
    #[error("Profile not found")]
    ProfileNotFound,

    /// GitHub lookup failed for the requested username
    #[error("No Github profile found")]
    GithubNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Missing profiles surface as 400, matching the public API
            // contract rather than strict REST semantics.
            ProfileError::Validation(_)
            | ProfileError::NoProfileForUser
            | ProfileError::ProfileNotFound => StatusCode::BAD_REQUEST,
            ProfileError::GithubNotFound => StatusCode::NOT_FOUND,
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::Validation(_)
            | ProfileError::NoProfileForUser
            | ProfileError::ProfileNotFound => ErrorKind::BadRequest,
            ProfileError::GithubNotFound => ErrorKind::NotFound,
            ProfileError::Database(_) | ProfileError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProfileError::Validation(errors) => AppError::validation(errors.clone()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profiles database error");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profiles internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Profiles error");
            }
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ProfileError {
    fn from(err: AppError) -> Self {
        ProfileError::Internal(err.to_string())
    }
}
