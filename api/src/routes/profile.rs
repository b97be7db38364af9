//! Profile endpoints for authenticated users

use actix_web::http::header;
use actix_web::{web, HttpResponse};

use pf_shared::types::ApiResponse;

use crate::dto::{UpdateProfileRequest, UserResponse};
use crate::handlers::{validate_payload, ApiResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    let user_id = user.0.user_id()?;
    let profile = state.auth.get_profile(user_id).await?;

    // Profile data is per-user, keep it out of shared caches
    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ApiResponse::success(UserResponse::from(profile))))
}

/// PUT /api/v1/profile
pub async fn update_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> ApiResult<HttpResponse> {
    validate_payload(&*payload)?;
    let user_id = user.0.user_id()?;

    let updated = state
        .auth
        .update_profile(user_id, &payload.full_name, payload.email.as_deref())
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ApiResponse::success(UserResponse::from(updated))))
}
