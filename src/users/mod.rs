// src/users/mod.rs

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;


pub use routes::users_routes;
pub use store::{SqliteUserStore, UserStore};
