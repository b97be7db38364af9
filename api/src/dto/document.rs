//! Document rendering DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// PDF rendering request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Optional document title; a default is used when absent
    #[validate(length(max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: String,
}

/// Location of a rendered PDF
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub filename: String,
    pub pdf_url: String,
}
