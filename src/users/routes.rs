// src/users/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the users router
///
/// # Routes
/// - `GET /users/me` - Current session user
/// - `GET /users/:userId` - Single user by id
/// - `DELETE /users/:userId` - Delete own account
pub fn users_routes() -> Router {
    Router::new()
        .route("/users/me", get(handlers::me_handler))
        .route(
            "/users/:userId",
            get(handlers::get_user_handler).delete(handlers::delete_user_handler),
        )
}
