// src/common/migrations.rs
//! Database schema bootstrap

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Create the schema, optionally dropping existing tables first
pub async fn run_migrations(pool: &SqlitePool, reset_db: bool) -> Result<(), sqlx::Error> {
    if reset_db {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        sqlx::query("DROP TABLE IF EXISTS users")
            .execute(pool)
            .await?;
        info!("Dropped old tables");
    }

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE NOT NULL,
            name TEXT,
            avatar TEXT,
            provider TEXT,
            provider_id TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_provider ON users(provider, provider_id)")
        .execute(pool)
        .await?;

    info!("Database migration completed successfully");

    Ok(())
}
