//! Text generation endpoint

use actix_web::{web, HttpResponse};

use pf_shared::types::ApiResponse;

use crate::dto::{ChatRequest, ChatResponse};
use crate::handlers::{validate_payload, ApiResult};
use crate::state::AppState;

/// POST /api/v1/chat
pub async fn generate(
    state: web::Data<AppState>,
    payload: web::Json<ChatRequest>,
) -> ApiResult<HttpResponse> {
    validate_payload(&*payload)?;

    let response = state.generation.generate_answer(&payload.topic).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(ChatResponse { response })))
}
