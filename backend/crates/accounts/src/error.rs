//! Accounts Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::FieldError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Request body failed validation (per-field messages attached)
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Email is already registered
    #[error("User already exists")]
    EmailTaken,

    /// Invalid credentials (never distinguishes unknown email from wrong password)
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// No token supplied on a protected route
    #[error("No token, authorization denied")]
    MissingToken,

    /// Token failed verification (bad signature or expired)
    #[error("Token is not valid")]
    TokenRejected,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Duplicate email is a conflict by nature but surfaces as 400,
            // matching the public API contract.
            AccountError::Validation(_)
            | AccountError::EmailTaken
            | AccountError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AccountError::MissingToken | AccountError::TokenRejected => StatusCode::UNAUTHORIZED,
            AccountError::UserNotFound => StatusCode::NOT_FOUND,
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_)
            | AccountError::EmailTaken
            | AccountError::InvalidCredentials => ErrorKind::BadRequest,
            AccountError::MissingToken | AccountError::TokenRejected => ErrorKind::Unauthorized,
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::Database(_) | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Validation(errors) => AppError::validation(errors.clone()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}
