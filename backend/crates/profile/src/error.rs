//! Profile Error Types
//!
//! Profile-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Wire shapes are kept compatible with existing clients: validation
//! failures and every "not found" answer with 400, store failures answer
//! with a plain-text 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde_json::json;
use thiserror::Error;

use crate::application::validation::FieldError;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Body of every 500 response; details stay in the logs.
pub const SERVER_ERROR_BODY: &str = "Server Error";

#[derive(Debug, Error)]
pub enum ProfileError {
    /// Required input missing or malformed; nothing was written
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The authenticated user has no profile
    #[error("Profile not found")]
    ProfileNotFound,

    /// Lookup by user id matched nothing (or the id was malformed)
    #[error("There is no such user profile created")]
    UserProfileNotFound,

    /// Bearer token missing or rejected
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Token could not be signed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProfileError::Validation(_)
            | ProfileError::ProfileNotFound
            | ProfileError::UserProfileNotFound => StatusCode::BAD_REQUEST,
            ProfileError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ProfileError::Token(_) | ProfileError::Database(_) | ProfileError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Error classification. Not-found answers keep status 400 on the wire
    /// but are classified as `NotFound`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::Validation(_) => ErrorKind::BadRequest,
            ProfileError::ProfileNotFound | ProfileError::UserProfileNotFound => {
                ErrorKind::NotFound
            }
            ProfileError::Unauthorized(_) => ErrorKind::Unauthorized,
            ProfileError::Token(_) | ProfileError::Database(_) | ProfileError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ProfileError::Unauthorized(_) => {
                err.with_action("Send a valid token in the Authorization header")
            }
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            ProfileError::Token(e) => {
                tracing::error!(error = %e, "Profile token error");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profile internal error");
            }
            ProfileError::Unauthorized(reason) => {
                tracing::warn!(reason = %reason, "Rejected unauthenticated request");
            }
            _ => {
                tracing::debug!(error = %self, "Profile request rejected");
            }
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        match self {
            ProfileError::Validation(errors) => {
                (status, Json(json!({ "errors": errors }))).into_response()
            }
            ProfileError::ProfileNotFound | ProfileError::UserProfileNotFound => {
                (status, Json(json!({ "msg": self.to_string() }))).into_response()
            }
            ProfileError::Unauthorized(_) => self.to_app_error().into_response(),
            ProfileError::Token(_) | ProfileError::Database(_) | ProfileError::Internal(_) => {
                (status, SERVER_ERROR_BODY).into_response()
            }
        }
    }
}
