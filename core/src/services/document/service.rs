//! Document service: renders an answer to PDF bytes and stores them
//! under a collision-free name

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{DomainResult, ValidationError};

/// Content of a document to be rendered
#[derive(Debug, Clone)]
pub struct DocumentContent {
    pub title: String,
    pub body: String,
}

/// A stored document and the path clients fetch it from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub filename: String,
    pub public_path: String,
}

/// Renders document content into PDF bytes
pub trait PdfRenderer: Send + Sync {
    fn render(&self, content: &DocumentContent) -> DomainResult<Vec<u8>>;
}

/// Persists rendered bytes under a filename
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn store(&self, filename: &str, bytes: &[u8]) -> DomainResult<()>;
}

/// Orchestrates rendering and storage of PDF documents
pub struct DocumentService {
    renderer: Arc<dyn PdfRenderer>,
    store: Arc<dyn DocumentStore>,
    public_prefix: String,
}

impl DocumentService {
    /// `public_prefix` is the URL prefix under which stored files are
    /// served, without a trailing slash.
    pub fn new(
        renderer: Arc<dyn PdfRenderer>,
        store: Arc<dyn DocumentStore>,
        public_prefix: impl Into<String>,
    ) -> Self {
        let mut public_prefix = public_prefix.into();
        while public_prefix.ends_with('/') {
            public_prefix.pop();
        }
        Self {
            renderer,
            store,
            public_prefix,
        }
    }

    /// Renders `content` to PDF and stores it under a random filename
    pub async fn create_pdf(&self, content: DocumentContent) -> DomainResult<StoredDocument> {
        if content.body.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "content".to_string(),
            }
            .into());
        }

        let bytes = self.renderer.render(&content)?;
        let filename = format!("{}.pdf", Uuid::new_v4());
        self.store.store(&filename, &bytes).await?;

        let public_path = format!("{}/{}", self.public_prefix, filename);
        tracing::info!(%filename, size = bytes.len(), "stored pdf document");

        Ok(StoredDocument {
            filename,
            public_path,
        })
    }
}
