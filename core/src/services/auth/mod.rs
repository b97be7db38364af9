//! Authentication service: registration, login, and profile management

mod password;
mod service;

pub use password::{hash_password, verify_password, BCRYPT_COST};
pub use service::AuthService;
