//! Bearer Tokens
//!
//! HS256 JWTs carrying the user id under `user.id`.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{ProfileError, ProfileResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: ClaimsUser,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: String,
}

/// Mint a token for `user_id`
pub fn issue_token(user_id: &UserId, config: &AuthConfig) -> ProfileResult<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        user: ClaimsUser {
            id: user_id.to_string(),
        },
        iat: now,
        exp: now + config.token_ttl_secs(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(&config.jwt_secret),
    )?;
    Ok(token)
}

/// Verify signature and expiry, return the authenticated user id
pub fn verify_token(token: &str, config: &AuthConfig) -> ProfileResult<UserId> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&config.jwt_secret),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        ProfileError::Unauthorized(TOKEN_INVALID)
    })?;

    UserId::parse(&data.claims.user.id).ok_or(ProfileError::Unauthorized(TOKEN_INVALID))
}

pub const TOKEN_MISSING: &str = "No token, authorization denied";
pub const TOKEN_INVALID: &str = "Token is not valid";

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_issue_then_verify() {
        let config = AuthConfig::with_random_secret();
        let user_id = UserId::new();

        let token = issue_token(&user_id, &config).unwrap();
        assert_eq!(verify_token(&token, &config).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(&UserId::new(), &AuthConfig::with_random_secret()).unwrap();
        let err = verify_token(&token, &AuthConfig::with_random_secret()).unwrap_err();
        assert!(matches!(err, ProfileError::Unauthorized(TOKEN_INVALID)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the default 60s leeway
        let config = AuthConfig {
            token_ttl: Duration::ZERO,
            ..AuthConfig::with_random_secret()
        };
        let now = Utc::now().timestamp();
        let claims = Claims {
            user: ClaimsUser {
                id: UserId::new().to_string(),
            },
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.jwt_secret),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let config = AuthConfig::default();
        assert!(verify_token("not.a.jwt", &config).is_err());
    }
}
