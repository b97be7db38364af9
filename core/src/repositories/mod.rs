//! Repository traits abstracting persistence from the domain layer

pub mod user;

pub use user::UserRepository;

#[cfg(any(test, feature = "mock"))]
pub use user::mock::MockUserRepository;
