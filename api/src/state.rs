//! Shared application state handed to every request handler

use std::path::PathBuf;
use std::sync::Arc;

use pf_core::services::auth::AuthService;
use pf_core::services::document::DocumentService;
use pf_core::services::generation::GenerationService;
use pf_core::services::rate_limit::RateLimiter;
use pf_core::services::token::TokenService;
use pf_shared::config::RateLimitConfig;

/// Services and limiters shared across workers.
///
/// Each throttled endpoint owns its own limiter so login pressure
/// never consumes the registration budget.
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
    pub generation: Arc<GenerationService>,
    pub documents: Arc<DocumentService>,
    pub login_limiter: Arc<RateLimiter>,
    pub register_limiter: Arc<RateLimiter>,
    pub rate_limits: RateLimitConfig,
    /// Directory generated PDFs are served from
    pub document_dir: PathBuf,
}
