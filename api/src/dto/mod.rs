//! Request and response shapes for the HTTP API

pub mod auth;
pub mod chat;
pub mod document;
pub mod profile;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use chat::{ChatRequest, ChatResponse};
pub use document::{CreateDocumentRequest, DocumentResponse};
pub use profile::UpdateProfileRequest;
