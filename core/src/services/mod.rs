//! Business logic services

pub mod auth;
pub mod document;
pub mod generation;
pub mod rate_limit;
pub mod token;
