//! Filesystem-backed document storage

use std::path::PathBuf;

use async_trait::async_trait;

use pf_core::errors::{DomainError, DomainResult};
use pf_core::services::document::DocumentStore;

/// Stores rendered documents under a local directory served as static
/// files
pub struct FileSystemStore {
    output_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for FileSystemStore {
    async fn store(&self, filename: &str, bytes: &[u8]) -> DomainResult<()> {
        // Filenames are generated UUIDs, but never trust a name with
        // path components.
        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return Err(DomainError::Internal {
                message: format!("refusing to store unsafe filename: {filename}"),
            });
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| io_err("create output directory", e))?;

        let path = self.output_dir.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| io_err("write document", e))?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "document written");
        Ok(())
    }
}

fn io_err(action: &str, err: std::io::Error) -> DomainError {
    DomainError::Internal {
        message: format!("failed to {action}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path().join("pdfs"));

        store.store("doc.pdf", b"%PDF test").await.unwrap();

        let written = std::fs::read(dir.path().join("pdfs").join("doc.pdf")).unwrap();
        assert_eq!(written, b"%PDF test");
    }

    #[tokio::test]
    async fn test_store_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        let result = store.store("../escape.pdf", b"data").await;
        assert!(result.is_err());
    }
}
