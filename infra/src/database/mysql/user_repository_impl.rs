//! MySQL implementation of `UserRepository`.
//!
//! Schema (`users` table): `id CHAR(36) PRIMARY KEY`, `username
//! VARCHAR(64) UNIQUE`, `password_hash VARCHAR(255)`, `full_name
//! VARCHAR(255)`, `email VARCHAR(255) NULL`, `created_at DATETIME`,
//! `last_login_at DATETIME NULL`, `login_count INT UNSIGNED`.
//! Username uniqueness relies on the column's case-insensitive
//! collation; queries still fold case explicitly so behavior does not
//! depend on it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pf_core::domain::entities::User;
use pf_core::errors::{DomainError, DomainResult};
use pf_core::repositories::UserRepository;

/// MySQL-backed user repository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &MySqlRow) -> DomainResult<User> {
        let id_str: String = row.try_get("id").map_err(db_err)?;
        let id = Uuid::parse_str(&id_str).map_err(|e| DomainError::Database {
            message: format!("invalid uuid in users.id: {e}"),
        })?;

        Ok(User {
            id,
            username: row.try_get("username").map_err(db_err)?,
            password_hash: row.try_get("password_hash").map_err(db_err)?,
            full_name: row.try_get("full_name").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err)?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(db_err)?,
            login_count: row.try_get::<u32, _>("login_count").map_err(db_err)?,
        })
    }
}

fn db_err(err: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: err.to_string(),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, full_name, email,
                   created_at, last_login_at, login_count
            FROM users
            WHERE LOWER(username) = LOWER(?)
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, full_name, email,
                   created_at, last_login_at, login_count
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, username, password_hash, full_name, email,
                 created_at, last_login_at, login_count)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(user.created_at)
        .bind(user.last_login_at)
        .bind(user.login_count)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?, password_hash = ?, full_name = ?, email = ?,
                last_login_at = ?, login_count = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(user.last_login_at)
        .bind(user.login_count)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("user {}", user.id),
            });
        }
        Ok(user)
    }

    async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE LOWER(username) = LOWER(?)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(count > 0)
    }
}
