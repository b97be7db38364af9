//! Authentication routes

mod login;
mod register;

pub use login::login;
pub use register::register;

use pf_core::errors::AuthError;
use pf_core::services::rate_limit::{RateLimitDecision, RateLimiter};

use crate::handlers::ApiError;

/// Runs the admission check for one throttled endpoint
fn enforce_limit(limiter: &RateLimiter, limit: u32, key: &str) -> Result<(), ApiError> {
    match limiter.check(key, limit) {
        RateLimitDecision::Allowed { .. } => Ok(()),
        RateLimitDecision::Rejected { retry_after_secs } => {
            log::warn!("rate limit exceeded for {key}");
            Err(AuthError::RateLimitExceeded { retry_after_secs }.into())
        }
    }
}
