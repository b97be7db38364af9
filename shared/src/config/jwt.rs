//! JWT configuration module

use serde::{Deserialize, Serialize};

use super::env_parse_or;

/// JWT signing and validation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret for HS256 signing
    pub secret: String,

    /// Access token lifetime in seconds (default: 1 hour)
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_secs: i64,

    /// Refresh token lifetime in seconds (default: 7 days)
    #[serde(default = "default_refresh_token_ttl")]
    pub refresh_token_ttl_secs: i64,
}

impl JwtConfig {
    /// Load JWT configuration from the environment
    ///
    /// `JWT_SECRET` is required and must not be empty.
    pub fn from_env() -> Result<Self, String> {
        let secret = std::env::var("JWT_SECRET").map_err(|_| "JWT_SECRET not set".to_string())?;
        if secret.is_empty() {
            return Err("JWT_SECRET must not be empty".to_string());
        }

        Ok(Self {
            secret,
            access_token_ttl_secs: env_parse_or("JWT_ACCESS_TOKEN_TTL", default_access_token_ttl()),
            refresh_token_ttl_secs: env_parse_or("JWT_REFRESH_TOKEN_TTL", default_refresh_token_ttl()),
        })
    }
}

fn default_access_token_ttl() -> i64 {
    3600 // 1 hour
}

fn default_refresh_token_ttl() -> i64 {
    7 * 24 * 3600 // 7 days
}
