//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

use super::env_parse_or;

/// Rate limiting configuration
///
/// Each throttled endpoint owns an independent limiter instance; the window
/// and request cap for the two authentication endpoints mirror the product
/// defaults (5 login attempts per minute, 3 registrations per hour, per IP).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Login endpoint limit
    pub login: EndpointRateLimit,

    /// Registration endpoint limit
    pub register: EndpointRateLimit,

    /// Soft cap on distinct keys a limiter keeps between sweeps
    #[serde(default = "default_max_tracked_keys")]
    pub max_tracked_keys: usize,
}

/// Window and cap for one throttled endpoint
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct EndpointRateLimit {
    /// Sliding window length in milliseconds
    pub window_ms: u64,

    /// Maximum admitted requests per key within one window
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login: EndpointRateLimit {
                window_ms: 60_000, // 1 minute
                max_requests: 5,
            },
            register: EndpointRateLimit {
                window_ms: 3_600_000, // 1 hour
                max_requests: 3,
            },
            max_tracked_keys: default_max_tracked_keys(),
        }
    }
}

impl RateLimitConfig {
    /// Load rate limit configuration from the environment, with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login: EndpointRateLimit {
                window_ms: env_parse_or("RATE_LIMIT_LOGIN_WINDOW_MS", defaults.login.window_ms),
                max_requests: env_parse_or("RATE_LIMIT_LOGIN_MAX", defaults.login.max_requests),
            },
            register: EndpointRateLimit {
                window_ms: env_parse_or(
                    "RATE_LIMIT_REGISTER_WINDOW_MS",
                    defaults.register.window_ms,
                ),
                max_requests: env_parse_or("RATE_LIMIT_REGISTER_MAX", defaults.register.max_requests),
            },
            max_tracked_keys: env_parse_or("RATE_LIMIT_MAX_TRACKED_KEYS", defaults.max_tracked_keys),
        }
    }
}

fn default_max_tracked_keys() -> usize {
    500
}
