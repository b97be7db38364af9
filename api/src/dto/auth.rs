//! Authentication DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pf_core::domain::entities::User;

/// Registration request payload.
///
/// Length bounds mirror `pf_shared::utils::validation`; the service
/// layer re-validates, including password character classes.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 4, max = 64))]
    pub username: String,

    #[validate(length(min = 8))]
    pub password: String,

    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    #[validate(email)]
    pub email: Option<String>,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Public view of a user account
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            email: user.email,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Successful login payload; the refresh token travels separately as
/// an HttpOnly cookie
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: UserResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}
