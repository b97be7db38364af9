//! HTTP route handlers

pub mod auth;
pub mod chat;
pub mod documents;
pub mod profile;

use actix_web::HttpResponse;

/// Liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
