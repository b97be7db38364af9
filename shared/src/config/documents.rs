//! Generated document storage configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Configuration for generated PDF storage
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// Directory where generated PDFs are written
    pub output_dir: String,

    /// Public URL prefix under which stored PDFs are served
    pub public_prefix: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            output_dir: String::from("public/pdfs"),
            public_prefix: String::from("/pdfs"),
        }
    }
}

impl DocumentConfig {
    /// Load document configuration from `PDF_OUTPUT_DIR` / `PDF_PUBLIC_PREFIX`
    pub fn from_env() -> Self {
        Self {
            output_dir: env_or("PDF_OUTPUT_DIR", "public/pdfs"),
            public_prefix: env_or("PDF_PUBLIC_PREFIX", "/pdfs"),
        }
    }
}
