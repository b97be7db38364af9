//! Application configuration modules
//!
//! Each configuration section is a typed struct with sensible defaults and an
//! environment-variable loader. `AppConfig::from_env` assembles the whole
//! configuration at process start.

mod database;
mod documents;
mod inference;
mod jwt;
mod rate_limit;
mod server;

pub use database::DatabaseConfig;
pub use documents::DocumentConfig;
pub use inference::InferenceConfig;
pub use jwt::JwtConfig;
pub use rate_limit::{EndpointRateLimit, RateLimitConfig};
pub use server::ServerConfig;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub inference: InferenceConfig,
    pub documents: DocumentConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    ///
    /// Missing variables fall back to defaults; only secrets without a sane
    /// default (JWT secret, inference API key, database URL) are required.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env(),
            inference: InferenceConfig::from_env()?,
            documents: DocumentConfig::from_env(),
        })
    }
}

/// Read an environment variable, falling back to a default
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
