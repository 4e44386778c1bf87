//! Post Error Types
//!
//! This module provides post-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::FieldError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Request body failed validation (per-field messages attached)
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Path id is not a well-formed id
    #[error("Invalid ID")]
    InvalidId,

    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// Comment not found on the post
    #[error("Comment does not exist")]
    CommentNotFound,

    /// Authenticated, but not the owner of the resource
    #[error("User not authorized")]
    NotAuthorized,

    /// The caller already likes this post
    #[error("Post already liked")]
    AlreadyLiked,

    /// The caller does not like this post
    #[error("Post has not yet been liked")]
    NotLiked,

    /// The authenticated author no longer resolves to a user
    #[error("User not found")]
    AuthorNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::Validation(_)
            | PostError::InvalidId
            | PostError::AlreadyLiked
            | PostError::NotLiked => StatusCode::BAD_REQUEST,
            PostError::PostNotFound | PostError::CommentNotFound | PostError::AuthorNotFound => {
                StatusCode::NOT_FOUND
            }
            PostError::NotAuthorized => StatusCode::UNAUTHORIZED,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::Validation(_)
            | PostError::InvalidId
            | PostError::AlreadyLiked
            | PostError::NotLiked => ErrorKind::BadRequest,
            PostError::PostNotFound | PostError::CommentNotFound | PostError::AuthorNotFound => {
                ErrorKind::NotFound
            }
            PostError::NotAuthorized => ErrorKind::Unauthorized,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::Validation(errors) => AppError::validation(errors.clone()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            PostError::NotAuthorized => {
                tracing::warn!("Rejected mutation by a non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PostError {
    fn from(err: AppError) -> Self {
        PostError::Internal(err.to_string())
    }
}
