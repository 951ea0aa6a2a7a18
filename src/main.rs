// src/main.rs
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{str::FromStr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod app;
mod auth;
mod common;
mod logging_middleware;
mod users;

use common::dev_mode::{
    apply_cli_override, ensure_dev_user, log_dev_mode_status, DevModeConfig,
};
use common::{AppState, ServerConfig};
use users::SqliteUserStore;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = ServerConfig::from_env();
    if config.uses_default_secret() {
        warn!("JWT_SECRET not set, using the built-in development secret");
    }
    info!(origins = ?config.cors_origins, "Loaded CORS origins");

    let dev_mode = apply_cli_override(DevModeConfig::from_env());
    log_dev_mode_status(&dev_mode);

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool, config.reset_db).await?;

    if dev_mode.is_enabled() {
        ensure_dev_user(&pool, &dev_mode).await?;
    }

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let shared = AppState {
        users: Arc::new(SqliteUserStore::new(pool)),
        jwt_secret: config.jwt_secret.clone(),
        dev_mode,
    }
    .into_shared();

    let app = app::build_router(shared, &config.cors_origins);

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = config.listen_addr();
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
