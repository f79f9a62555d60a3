//! Request Body Extractor
//!
//! JSON bodies whose failures answer like validation failures. A missing or
//! empty body is read as an empty object so the required-field checks report
//! what is missing. `Content-Type` is not enforced.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::application::validation::FieldError;
use crate::error::ProfileError;

/// JSON request body, `T::default()` when the body is empty
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ProfileError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| body_error(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| body_error(format!("Invalid request body: {e}")))
    }
}

fn body_error(msg: impl Into<String>) -> ProfileError {
    ProfileError::Validation(vec![FieldError::body("body", None, msg)])
}
