//! # PDFolio API
//!
//! HTTP layer wiring the core services to actix-web: route handlers,
//! DTOs, authentication extraction, CORS, and error mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::configure_app;
pub use state::AppState;
