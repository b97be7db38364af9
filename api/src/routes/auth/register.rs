//! Account registration endpoint

use actix_web::{web, HttpRequest, HttpResponse};

use pf_shared::types::ApiResponse;

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::{client_ip, validate_payload, ApiResult};
use crate::state::AppState;

use super::enforce_limit;

/// POST /api/v1/auth/register
pub async fn register(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let ip = client_ip(&req);
    enforce_limit(
        &state.register_limiter,
        state.rate_limits.register.max_requests,
        &ip,
    )?;
    validate_payload(&*payload)?;

    let user = state
        .auth
        .register(
            &payload.username,
            &payload.password,
            &payload.full_name,
            payload.email.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(UserResponse::from(user))))
}
