//! Password hashing helpers

use crate::errors::{DomainError, DomainResult};

/// Bcrypt work factor for new password hashes
pub const BCRYPT_COST: u32 = 12;

/// Hashes a plaintext password with bcrypt
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {e}"),
    })
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// A malformed hash verifies as false rather than erroring, so a
/// corrupted row cannot be distinguished from a wrong password by the
/// caller.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
