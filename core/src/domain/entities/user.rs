//! User entity representing a registered account in the PDFolio system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name, unique case-insensitively
    pub username: String,

    /// Bcrypt hash of the password; never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name
    pub full_name: String,

    /// Optional contact email
    pub email: Option<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the user's last successful login
    pub last_login_at: Option<DateTime<Utc>>,

    /// Number of successful logins
    pub login_count: u32,
}

impl User {
    /// Creates a new User instance
    pub fn new(username: String, password_hash: String, full_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            full_name,
            email: None,
            created_at: Utc::now(),
            last_login_at: None,
            login_count: 0,
        }
    }

    /// Attaches an email address
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Records a successful login
    pub fn record_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.login_count += 1;
    }

    /// Updates the display name
    pub fn update_full_name(&mut self, full_name: String) {
        self.full_name = full_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(
            "janedoe".to_string(),
            "$2b$12$hash".to_string(),
            "Jane Doe".to_string(),
        );

        assert_eq!(user.username, "janedoe");
        assert_eq!(user.full_name, "Jane Doe");
        assert_eq!(user.email, None);
        assert_eq!(user.login_count, 0);
        assert!(user.last_login_at.is_none());
    }

    #[test]
    fn test_record_login() {
        let mut user = User::new(
            "janedoe".to_string(),
            "$2b$12$hash".to_string(),
            "Jane Doe".to_string(),
        );

        user.record_login();
        assert_eq!(user.login_count, 1);
        assert!(user.last_login_at.is_some());

        user.record_login();
        assert_eq!(user.login_count, 2);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "janedoe".to_string(),
            "$2b$12$secret".to_string(),
            "Jane Doe".to_string(),
        );

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_with_email() {
        let user = User::new(
            "janedoe".to_string(),
            "$2b$12$hash".to_string(),
            "Jane Doe".to_string(),
        )
        .with_email(Some("jane@example.com".to_string()));

        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
    }
}
