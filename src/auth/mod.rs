//! # Auth Module
//!
//! Resolves the session user for each request:
//! - Bearer JWT validation
//! - Loading the token subject from the user store
//! - `SessionUser` extractor for handlers that read the current user

pub mod models;
pub mod session;


pub use session::{resolve_session, SessionUser};
