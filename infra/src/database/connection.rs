//! MySQL connection pool setup

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use pf_shared::config::DatabaseConfig;

/// Creates a connection pool from the database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
