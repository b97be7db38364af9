//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, ErrorResponse, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("External service error ({service}): {message}")]
    ExternalService { service: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Database { .. } => "DATABASE_ERROR",
            DomainError::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(AuthError::InvalidCredentials) => "INVALID_CREDENTIALS",
            DomainError::Auth(AuthError::UserAlreadyExists) => "USER_ALREADY_EXISTS",
            DomainError::Auth(AuthError::UserNotFound) => "USER_NOT_FOUND",
            DomainError::Auth(AuthError::RateLimitExceeded { .. }) => "RATE_LIMIT_EXCEEDED",
            DomainError::Token(TokenError::TokenExpired) => "TOKEN_EXPIRED",
            DomainError::Token(TokenError::InvalidTokenFormat) => "INVALID_TOKEN_FORMAT",
            DomainError::Token(TokenError::InvalidSignature) => "INVALID_SIGNATURE",
            DomainError::Token(TokenError::InvalidClaims) => "INVALID_CLAIMS",
            DomainError::Token(TokenError::TokenGenerationFailed) => "TOKEN_GENERATION_FAILED",
            DomainError::ValidationErr(ValidationError::RequiredField { .. }) => "REQUIRED_FIELD",
            DomainError::ValidationErr(ValidationError::TooShort { .. }) => "TOO_SHORT",
            DomainError::ValidationErr(ValidationError::PasswordTooWeak) => "PASSWORD_TOO_WEAK",
            DomainError::ValidationErr(ValidationError::InvalidFormat { .. }) => "INVALID_FORMAT",
        }
    }

    /// True for error classes whose details must not reach clients
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::Database { .. }
                | DomainError::Internal { .. }
                | DomainError::ExternalService { .. }
        )
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse::new(err.error_code(), err.to_string())
    }
}
