//! Domain entities

pub mod token;
pub mod user;

pub use token::{Claims, RefreshClaims, TokenPair};
pub use user::User;
