use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::info;

use crate::config::AppConfig;

pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("invalid DATABASE_URL {:?}", config.database_url))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    info!(url = %config.database_url, "database connected");
    Ok(pool)
}

/// Creates the `users` table and its index when absent. There is no versioning.
pub async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            name TEXT,
            age INTEGER,
            active BOOLEAN NOT NULL DEFAULT 1
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create users table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_users_name ON users (name);")
        .execute(pool)
        .await
        .context("failed to create users name index")?;

    Ok(())
}

#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    // every :memory: connection is its own database, so keep exactly one alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    init_schema(&pool).await.expect("schema");
    pool
}
