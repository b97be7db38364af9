//! Registration, login, and profile operations over a `UserRepository`

use std::sync::Arc;

use uuid::Uuid;

use pf_shared::utils::validation;

use crate::domain::entities::User;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

use super::password::{hash_password, verify_password};

/// Authentication service over an abstract persistence backend
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new account.
    ///
    /// Username uniqueness is case-insensitive; the stored username
    /// keeps the caller's casing.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        full_name: &str,
        email: Option<&str>,
    ) -> DomainResult<User> {
        validate_username(username)?;
        validate_password(password)?;
        if !validation::not_empty(full_name) {
            return Err(ValidationError::RequiredField {
                field: "full_name".to_string(),
            }
            .into());
        }

        if self.repository.exists_by_username(username).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(password)?;
        let user = User::new(
            username.to_string(),
            password_hash,
            full_name.trim().to_string(),
        )
        .with_email(email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()));

        let user = self.repository.create(user).await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticates a user by username and password.
    ///
    /// Unknown usernames and wrong passwords both map to
    /// `InvalidCredentials` so the response does not reveal which
    /// accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<User> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let mut user = user;
        user.record_login();
        let user = self.repository.update(user).await?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(user)
    }

    /// Fetches the profile of an authenticated user
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// Updates the mutable profile fields of an authenticated user
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: &str,
        email: Option<&str>,
    ) -> DomainResult<User> {
        if !validation::not_empty(full_name) {
            return Err(ValidationError::RequiredField {
                field: "full_name".to_string(),
            }
            .into());
        }

        let mut user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.update_full_name(full_name.trim().to_string());
        if let Some(email) = email {
            let email = email.trim();
            user.email = if email.is_empty() {
                None
            } else {
                Some(email.to_string())
            };
        }

        self.repository.update(user).await
    }
}

fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "username".to_string(),
        }
        .into());
    }
    if !validation::is_valid_username(username) {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: validation::USERNAME_MIN_LEN,
        }
        .into());
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        }
        .into());
    }
    if password.chars().count() < validation::PASSWORD_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: validation::PASSWORD_MIN_LEN,
        }
        .into());
    }
    if !validation::password_has_required_classes(password) {
        return Err(ValidationError::PasswordTooWeak.into());
    }
    Ok(())
}
