//! Application Configuration
//!
//! Configuration for bearer-token verification.

use std::time::Duration;

/// Auth configuration for the profile service
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret for HS256 tokens
    pub jwt_secret: Vec<u8>,
    /// Lifetime of tokens minted by `issue_token`
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: vec![0u8; 32],
            token_ttl: Duration::from_secs(360_000), // 100 hours
        }
    }
}

impl AuthConfig {
    /// Create config with a random secret (tokens do not survive restarts)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            jwt_secret: secret,
            ..Default::default()
        }
    }

    /// Config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
