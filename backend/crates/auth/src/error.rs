//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::upload::UploadError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session cookie on a protected request
    #[error("Unauthorized")]
    Unauthenticated,

    /// Token present but forged, truncated or expired
    #[error("Unauthorized")]
    SessionInvalid,

    /// Unknown user name or wrong password; the two are never told apart
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unique constraint on the user name
    #[error("Username already exists")]
    UserNameTaken,

    /// Rejected input, already phrased for the caller
    #[error("{0}")]
    Validation(AppError),

    /// Multipart body could not be read
    #[error("Malformed form data: {0}")]
    MalformedForm(String),

    /// Request body exceeded the configured limit
    #[error("Upload too large")]
    UploadTooLarge,

    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Unauthenticated
            | AuthError::SessionInvalid
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::Validation(err) => err.kind(),
            AuthError::MalformedForm(_) | AuthError::Upload(UploadError::Empty) => {
                ErrorKind::BadRequest
            }
            AuthError::UploadTooLarge => ErrorKind::PayloadTooLarge,
            AuthError::Upload(UploadError::Io(_))
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError, hiding server-side detail
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Validation(err) => err,
            AuthError::Database(err) => AppError::from(err),
            AuthError::Upload(UploadError::Io(err)) => AppError::from(err),
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Upload(UploadError::Io(e)) => {
                tracing::error!(error = %e, "Avatar upload failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::SessionInvalid => {
                tracing::warn!("Rejected invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
