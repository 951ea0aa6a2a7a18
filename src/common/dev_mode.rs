// src/common/dev_mode.rs
//! Development mode configuration and utilities
//! Attaches a fixed session user to every request so routes can be exercised without tokens

use chrono::Utc;
use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

use crate::users::models::{User, UserId};

/// Fixed id so the dev user is stable across requests
pub const DEV_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

#[derive(Debug, Clone)]
pub struct DevModeConfig {
    pub enabled: bool,
    pub user_email: String,
    pub user_name: String,
}

impl DevModeConfig {
    pub fn from_env() -> Self {
        let enabled = env::var("DEV_MODE")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        let user_email = env::var("DEV_USER_EMAIL").unwrap_or_else(|_| "dev@test.com".to_string());

        let user_name = env::var("DEV_USER_NAME").unwrap_or_else(|_| "Dev User".to_string());

        Self {
            enabled,
            user_email,
            user_name,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The session user attached to requests while dev mode is on
    pub fn create_dev_user(&self) -> User {
        User {
            id: UserId::new(DEV_USER_ID),
            email: self.user_email.clone(),
            name: Some(self.user_name.clone()),
            avatar: None,
            provider: Some("dev".to_string()),
            provider_id: Some(DEV_USER_ID.to_string()),
            created_at: Some(Utc::now().to_rfc3339()),
        }
    }
}

/// Writes the dev user to the store so routes keyed by its id resolve.
/// Leaves an existing row (same id or same email) untouched.
pub async fn ensure_dev_user(pool: &SqlitePool, config: &DevModeConfig) -> Result<(), sqlx::Error> {
    let dev_user = config.create_dev_user();

    let result = sqlx::query(
        "INSERT OR IGNORE INTO users (id, email, name, provider, provider_id, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(dev_user.id.as_str())
    .bind(&dev_user.email)
    .bind(dev_user.name.as_deref())
    .bind(dev_user.provider.as_deref())
    .bind(dev_user.provider_id.as_deref())
    .bind(dev_user.created_at.as_deref())
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        info!(user_id = %dev_user.id, "Dev user written to store");
    } else {
        info!(user_id = %dev_user.id, "Dev user already present in store");
    }

    Ok(())
}

/// Log dev mode status on startup
pub fn log_dev_mode_status(config: &DevModeConfig) {
    if config.enabled {
        warn!(
            dev_user = %config.user_name,
            dev_email = %config.user_email,
            "DEV MODE ENABLED: session authentication bypassed, do not use in production"
        );
    } else {
        info!("Production mode - bearer token required for session user");
    }
}

/// CLI argument parsing for dev mode
pub fn parse_dev_mode_args<I>(args: I) -> Option<bool>
where
    I: IntoIterator<Item = String>,
{
    // Last flag wins
    args.into_iter()
        .filter_map(|arg| match arg.as_str() {
            "--dev" | "--dev-mode" => Some(true),
            "--no-dev" | "--prod" | "--production" => Some(false),
            _ => None,
        })
        .last()
}

/// Override dev mode from CLI args
pub fn apply_cli_override(mut config: DevModeConfig) -> DevModeConfig {
    if let Some(cli_dev_mode) = parse_dev_mode_args(env::args()) {
        info!(dev_mode = cli_dev_mode, "CLI override applied to DEV_MODE");
        config.enabled = cli_dev_mode;
    }

    config
}
