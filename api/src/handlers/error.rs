//! Mapping of domain errors onto HTTP responses

use std::fmt;

use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use pf_core::errors::{AuthError, DomainError, ErrorResponse, TokenError, ValidationError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper giving `DomainError` an HTTP rendering
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn inner(&self) -> &DomainError {
        &self.0
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            DomainError::Auth(AuthError::UserAlreadyExists) => StatusCode::CONFLICT,
            DomainError::Auth(AuthError::UserNotFound) => StatusCode::NOT_FOUND,
            DomainError::Auth(AuthError::RateLimitExceeded { .. }) => {
                StatusCode::TOO_MANY_REQUESTS
            }
            DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            DomainError::ExternalService { .. } => StatusCode::BAD_GATEWAY,
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal detail stays in the log; clients get a generic body.
        let body = if self.0.is_internal() {
            log::error!("request failed: {}", self.0);
            ErrorResponse::new(self.0.error_code(), "An internal error occurred")
        } else {
            ErrorResponse::from(&self.0)
        };

        let mut builder = HttpResponse::build(self.status_code());
        if let DomainError::Auth(AuthError::RateLimitExceeded { retry_after_secs }) = &self.0 {
            builder.insert_header((header::RETRY_AFTER, retry_after_secs.to_string()));
        }
        builder.json(body)
    }
}

/// Runs derive-based validation and maps failures to a 400 response
pub fn validate_payload<T: validator::Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|e| {
        ApiError::from(DomainError::Validation {
            message: e.to_string(),
        })
    })
}

/// Best-effort client address for rate limiting keys.
///
/// Trusts the first `X-Forwarded-For` hop, then `X-Real-IP`, then the
/// peer address. Behind a proxy the peer address would collapse every
/// client onto one key.
pub fn client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = req
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
    {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_rate_limit_maps_to_429_with_retry_after() {
        let err = ApiError::from(AuthError::RateLimitExceeded {
            retry_after_secs: 30,
        });
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);

        let response = err.error_response();
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "30"
        );
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let err = ApiError::from(DomainError::Database {
            message: "connection refused to mysql://secret-host".to_string(),
        });
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_ip_prefers_forwarded_header() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.9, 10.0.0.1"))
            .to_http_request();
        assert_eq!(client_ip(&req), "203.0.113.9");
    }

    #[test]
    fn test_client_ip_falls_back_to_real_ip() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "198.51.100.7"))
            .to_http_request();
        assert_eq!(client_ip(&req), "198.51.100.7");
    }
}
