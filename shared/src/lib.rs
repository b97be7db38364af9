//! Shared utilities and common types for the PDFolio server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Validation utilities
//! - Common type definitions

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, DocumentConfig, InferenceConfig, JwtConfig, RateLimitConfig,
    ServerConfig,
};
pub use types::response::ApiResponse;
pub use utils::validation;
