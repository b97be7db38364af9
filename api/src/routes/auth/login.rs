//! Login endpoint

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;

use pf_shared::types::ApiResponse;

use crate::dto::{AuthResponse, LoginRequest};
use crate::handlers::{client_ip, validate_payload, ApiResult};
use crate::state::AppState;

use super::enforce_limit;

/// Cookie carrying the refresh token, scoped to the auth routes
pub const REFRESH_COOKIE: &str = "refresh_token";

/// POST /api/v1/auth/login
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let ip = client_ip(&req);
    enforce_limit(
        &state.login_limiter,
        state.rate_limits.login.max_requests,
        &ip,
    )?;
    validate_payload(&*payload)?;

    let user = state.auth.login(&payload.username, &payload.password).await?;
    let pair = state.tokens.generate_pair(&user)?;

    let max_age = (pair.refresh_expires_at - Utc::now()).num_seconds().max(0);
    let cookie = Cookie::build(REFRESH_COOKIE, pair.refresh_token)
        .path("/api/v1/auth")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::seconds(max_age))
        .finish();

    let body = AuthResponse::new(pair.access_token, pair.expires_in, user.into());
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success(body)))
}
