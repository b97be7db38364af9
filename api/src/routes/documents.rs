//! PDF creation and retrieval endpoints

use actix_web::{web, HttpResponse};

use pf_core::errors::DomainError;
use pf_core::services::document::DocumentContent;
use pf_shared::types::ApiResponse;

use crate::dto::{CreateDocumentRequest, DocumentResponse};
use crate::handlers::{validate_payload, ApiResult};
use crate::state::AppState;

const DEFAULT_TITLE: &str = "Generated Answer";

/// POST /api/v1/documents
pub async fn create(
    state: web::Data<AppState>,
    payload: web::Json<CreateDocumentRequest>,
) -> ApiResult<HttpResponse> {
    validate_payload(&*payload)?;
    let payload = payload.into_inner();

    let title = payload
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let stored = state
        .documents
        .create_pdf(DocumentContent {
            title,
            body: payload.content,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(DocumentResponse {
        filename: stored.filename,
        pdf_url: stored.public_path,
    })))
}

/// GET /pdfs/{filename}
pub async fn fetch(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let filename = path.into_inner();
    if filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
        || !filename.ends_with(".pdf")
    {
        return Err(not_found(&filename));
    }

    let full_path = state.document_dir.join(&filename);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("application/pdf")
            .body(bytes)),
        Err(_) => Err(not_found(&filename)),
    }
}

fn not_found(filename: &str) -> crate::handlers::ApiError {
    DomainError::NotFound {
        resource: format!("document {filename}"),
    }
    .into()
}
