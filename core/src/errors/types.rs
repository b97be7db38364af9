//! Domain-specific error types for authentication and related operations
//!
//! Each error enum covers one concern; the umbrella `DomainError` in the
//! parent module bridges them. `ErrorResponse` is the wire shape the API
//! layer serializes, keyed by a stable machine-readable code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Single undifferentiated error for unknown user or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Too many requests. Please try again in {retry_after_secs} seconds")]
    RateLimitExceeded { retry_after_secs: u64 },
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid length for field: {field} (minimum: {min})")]
    TooShort { field: String, min: usize },

    #[error("Password must contain at least one uppercase letter, one lowercase letter, and one number")]
    PasswordTooWeak,

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::InvalidClaims => "INVALID_CLAIMS",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::TooShort { .. } => "TOO_SHORT",
            ValidationError::PasswordTooWeak => "PASSWORD_TOO_WEAK",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_error_message() {
        let error = AuthError::RateLimitExceeded {
            retry_after_secs: 42,
        };
        let message = error.to_string();
        assert!(message.contains("42 seconds"));
    }

    #[test]
    fn test_auth_error_conversion() {
        let error = AuthError::InvalidCredentials;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "INVALID_CREDENTIALS");
        assert!(response.message.contains("Invalid credentials"));
    }

    #[test]
    fn test_error_response_with_detail() {
        let response = ErrorResponse::new("TEST_ERROR", "Test error message")
            .with_detail("retry_after_seconds", serde_json::json!(60));

        assert_eq!(response.error, "TEST_ERROR");
        assert_eq!(
            response.details.unwrap()["retry_after_seconds"],
            serde_json::json!(60)
        );
    }

    #[test]
    fn test_validation_error_codes() {
        let response: ErrorResponse = ValidationError::PasswordTooWeak.into();
        assert_eq!(response.error, "PASSWORD_TOO_WEAK");
    }
}
