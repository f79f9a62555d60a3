//! Auth Middleware
//!
//! Requires a valid bearer token on protected routes and hands the
//! authenticated user to handlers through request extensions.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::config::AuthConfig;
use crate::application::token::{TOKEN_MISSING, verify_token};
use crate::domain::value_object::UserId;
use crate::error::{ProfileError, ProfileResult};

/// Legacy header some clients still send instead of `Authorization`
pub const LEGACY_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated caller, stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> ProfileResult<Response> {
    let token = extract_token(req.headers()).ok_or(ProfileError::Unauthorized(TOKEN_MISSING))?;
    let user_id = verify_token(&token, &config)?;

    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| {
            let (scheme, token) = v.trim().split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
        });

    bearer
        .or_else(|| {
            headers
                .get(LEGACY_TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
        })
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_token(&headers).as_deref(), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer  xyz "));
        assert_eq!(extract_token(&headers).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_extract_legacy_header() {
        let mut headers = HeaderMap::new();
        headers.insert(LEGACY_TOKEN_HEADER, HeaderValue::from_static("legacy"));
        assert_eq!(extract_token(&headers).as_deref(), Some("legacy"));
    }

    #[test]
    fn test_extract_rejects_other_schemes_and_blank() {
        let mut headers = HeaderMap::new();
        assert!(extract_token(&headers).is_none());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert!(extract_token(&headers).is_none());

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(extract_token(&headers).is_none());
    }
}
