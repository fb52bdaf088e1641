//! My Page Error Types
//!
//! Crate-local failures. Wrong passwords are deliberately absent: they are
//! reported as `Ok(0)` by the use cases, not as errors.

use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::upload::UploadPathError;
use thiserror::Error;

/// My Page result type alias
pub type MyPageResult<T> = Result<T, MyPageError>;

/// My Page error variants
#[derive(Debug, Error)]
pub enum MyPageError {
    /// No login member on the request
    #[error("Sign in required")]
    NotSignedIn,

    /// Uploaded file name would leave the upload directory
    #[error("File name is not allowed: {0}")]
    InvalidFileName(#[from] UploadPathError),

    /// Multipart body could not be read
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Upload body exceeds `max_upload_bytes`
    #[error("Upload too large: {0}")]
    UploadTooLarge(String),

    /// Hashing the new password failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Filesystem write failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MyPageError {
    /// Convert to the shared error type.
    ///
    /// Storage and database causes go through the kernel conversions, so
    /// their detail ends up in `source` rather than in the client message.
    pub fn into_app_error(self) -> AppError {
        match self {
            MyPageError::NotSignedIn => AppError::unauthorized("Sign in required")
                .with_action("Please sign in and try again"),
            MyPageError::InvalidFileName(e) => AppError::bad_request(e.to_string())
                .with_action("Please rename the file and upload it again"),
            MyPageError::InvalidUpload(msg) => AppError::bad_request(msg),
            MyPageError::UploadTooLarge(msg) => AppError::new(ErrorKind::PayloadTooLarge, msg)
                .with_action("Please choose a smaller file"),
            MyPageError::PasswordHash(msg) => {
                AppError::new(ErrorKind::InternalServerError, "Password could not be changed")
                    .with_source(MyPageError::PasswordHash(msg))
            }
            MyPageError::Storage(e) => AppError::from(e),
            MyPageError::Database(e) => AppError::from(e),
            MyPageError::Internal(msg) => AppError::internal(msg),
        }
    }

    /// HTTP status this error renders with
    pub fn status_code(self) -> StatusCode {
        StatusCode::from_u16(self.into_app_error().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn log(&self) {
        match self {
            MyPageError::Database(e) => {
                tracing::error!(error = %e, "My page database error");
            }
            MyPageError::Storage(e) => {
                tracing::error!(error = %e, "Upload storage error");
            }
            MyPageError::PasswordHash(msg) | MyPageError::Internal(msg) => {
                tracing::error!(message = %msg, "My page internal error");
            }
            MyPageError::InvalidFileName(e) => {
                tracing::warn!(reason = %e, "Rejected upload file name");
            }
            _ => {
                tracing::debug!(error = %self, "My page error");
            }
        }
    }
}

impl IntoResponse for MyPageError {
    fn into_response(self) -> Response {
        self.log();
        let signed_out = matches!(self, MyPageError::NotSignedIn);
        let mut response = self.into_app_error().into_response();
        if signed_out {
            response
                .headers_mut()
                .insert("x-auth-required", HeaderValue::from_static("true"));
        }
        response
    }
}
