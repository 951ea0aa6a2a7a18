// src/common/config.rs
//! Server configuration read from the environment (after `.env` is loaded)

use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";
const DEFAULT_JWT_SECRET: &str = "replace_with_strong_secret";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub cors_origins: Vec<String>,
    /// Drop and recreate the schema on startup
    pub reset_db: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let reset_db = env::var("RESET_DB")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        Self {
            database_url,
            port,
            jwt_secret,
            cors_origins,
            reset_db,
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Splits a comma-separated origin list, dropping blanks and the `*` wildcard
/// (credentialed CORS cannot use it).
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "*")
        .map(|s| s.to_string())
        .collect()
}
