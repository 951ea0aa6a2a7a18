// src/users/store.rs
//! Persistent user store: the find-by-id and remove-by-id operations the
//! profile handlers depend on, and their SQLite implementation.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use super::models::{User, UserId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Raw error detail returned to clients when a store mutation fails
#[derive(Debug, Serialize)]
pub struct StoreErrorDetail {
    pub name: &'static str,
    pub message: String,
}

impl StoreError {
    pub fn detail(&self) -> StoreErrorDetail {
        match self {
            StoreError::DatabaseError(e) => StoreErrorDetail {
                name: "DatabaseError",
                message: e.to_string(),
            },
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// Returns the number of records removed. Removing an id that is not
    /// stored is not an error.
    async fn remove_by_id(&self, id: &UserId) -> Result<u64, StoreError>;
}

#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    db: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.db)
            .await?;

        debug!(user_id = %id, found = user.is_some(), "User lookup");
        Ok(user)
    }

    async fn remove_by_id(&self, id: &UserId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.db)
            .await?;

        debug!(user_id = %id, rows = result.rows_affected(), "User delete");
        Ok(result.rows_affected())
    }
}
