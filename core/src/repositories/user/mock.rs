//! In-memory mock implementation of `UserRepository` for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Mock user repository backed by a `HashMap`
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    fail_next: Arc<RwLock<bool>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with a database error
    pub async fn set_fail_next(&self, fail: bool) {
        *self.fail_next.write().await = fail;
    }

    /// Seeds a user directly, bypassing uniqueness checks
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    async fn check_fail(&self) -> DomainResult<()> {
        let mut fail = self.fail_next.write().await;
        if *fail {
            *fail = false;
            return Err(DomainError::Database {
                message: "simulated database failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.check_fail().await?;
        let users = self.users.read().await;
        let needle = username.to_lowercase();
        Ok(users
            .values()
            .find(|u| u.username.to_lowercase() == needle)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.check_fail().await?;
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        self.check_fail().await?;
        let mut users = self.users.write().await;
        let needle = user.username.to_lowercase();
        if users.values().any(|u| u.username.to_lowercase() == needle) {
            return Err(DomainError::Database {
                message: format!("duplicate username: {}", user.username),
            });
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        self.check_fail().await?;
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: format!("user {}", user.id),
            });
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        self.check_fail().await?;
        let users = self.users.read().await;
        let needle = username.to_lowercase();
        Ok(users.values().any(|u| u.username.to_lowercase() == needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(username: &str) -> User {
        User::new(
            username.to_string(),
            "$2b$12$hash".to_string(),
            "Test User".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_username() {
        let repo = MockUserRepository::new();
        let user = repo.create(sample_user("janedoe")).await.unwrap();

        let found = repo.find_by_username("JaneDoe").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("janedoe")).await.unwrap();

        let result = repo.create(sample_user("JANEDOE")).await;
        assert!(result.is_err());
        assert_eq!(repo.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = MockUserRepository::new();
        let result = repo.update(sample_user("ghost")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_fail_next_applies_once() {
        let repo = MockUserRepository::new();
        repo.set_fail_next(true).await;

        assert!(repo.find_by_username("anyone").await.is_err());
        assert!(repo.find_by_username("anyone").await.is_ok());
    }
}
