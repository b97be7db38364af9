//! Cross-cutting request handling: error mapping and client identity

mod error;

pub use error::{client_ip, validate_payload, ApiError, ApiResult};
