// Common module - shared types and utilities across all modules

pub mod config;
pub mod dev_mode;
pub mod error;
pub mod helpers;
pub mod jsonp;
pub mod migrations;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{ApiError, MessageResponse};
pub use helpers::safe_email_log;
pub use jsonp::{Jsonp, JsonpQuery};
pub use state::{AppState, SharedState};
