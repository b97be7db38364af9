//! JWT issuing and validation

mod service;

pub use service::TokenService;
