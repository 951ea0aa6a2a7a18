//! User data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// User identifier
///
/// Holds the id as the caller or the store spelled it (trimmed), and that
/// spelling is what the store is queried with. Equality and hashing go
/// through `normalized()`, so two spellings of the same UUID compare equal
/// no matter whether the id came from a path, a token or a database row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type)]
#[serde(from = "String", into = "String")]
#[sqlx(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparison form: UUIDs in lowercase hyphenated form, anything else trimmed
    pub fn normalized(&self) -> String {
        let trimmed = self.0.trim();
        match Uuid::parse_str(trimmed) {
            Ok(uuid) => uuid.hyphenated().to_string(),
            Err(_) => trimmed.to_string(),
        }
    }
}

impl PartialEq for UserId {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for UserId {}

impl Hash for UserId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl From<String> for UserId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User database model
#[derive(FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub created_at: Option<String>,
}
