//! Bearer token extraction for protected routes

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use pf_core::domain::entities::Claims;
use pf_core::errors::{DomainError, TokenError};

use crate::handlers::ApiError;
use crate::state::AppState;

/// Extractor that validates the `Authorization: Bearer` header and
/// exposes the verified claims to the handler
#[derive(Debug)]
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| DomainError::Internal {
            message: "application state not configured".to_string(),
        })?;

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(TokenError::InvalidTokenFormat)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(TokenError::InvalidTokenFormat)?;

    let claims = state.tokens.validate_access_token(token)?;
    Ok(AuthenticatedUser(claims))
}
