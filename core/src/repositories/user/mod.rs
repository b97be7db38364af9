//! User repository abstraction

mod repository;

pub use repository::UserRepository;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
