//! User repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainResult;

/// Repository interface for user persistence.
///
/// Usernames are unique case-insensitively; lookups by username must
/// fold case before comparing.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by username, ignoring case
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    /// Finds a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Persists a new user and returns the stored entity
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Updates an existing user in place
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Checks whether a username is already taken, ignoring case
    async fn exists_by_username(&self, username: &str) -> DomainResult<bool>;
}
