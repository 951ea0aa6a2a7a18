// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::users::models::UserId;
use crate::users::store::StoreError;

pub const NO_USER_DETECTED: &str = "no user detected";
pub const SELF_ONLY_MESSAGE: &str = "Only the signed in User can make this change to this User";

fn not_found_message(id: &UserId) -> String {
    format!("Couldn't get user with ID: {}", id)
}

/// API error types
///
/// Not-found and unauthenticated both answer 500, not 404/401.
#[derive(Debug)]
pub enum ApiError {
    /// The requested user is missing from the store, or the lookup itself failed.
    UserNotFound(UserId),
    /// No session user is attached to the request.
    NoUserDetected,
    /// The signed-in user is acting on someone else's account.
    NotAccountOwner,
    /// The store rejected a mutation; the raw detail is returned to the caller.
    Store(StoreError),
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UserNotFound(id) => f.write_str(&not_found_message(id)),
            ApiError::NoUserDetected => write!(f, "{}", NO_USER_DETECTED),
            ApiError::NotAccountOwner => write!(f, "{}", SELF_ONLY_MESSAGE),
            ApiError::Store(e) => write!(f, "Store Error: {}", e),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// `{ "message": ... }` body shared by success and error responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn success() -> Self {
        Self::new("Success")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::UserNotFound(id) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(not_found_message(&id))),
            )
                .into_response(),
            ApiError::NoUserDetected => {
                (StatusCode::INTERNAL_SERVER_ERROR, NO_USER_DETECTED).into_response()
            }
            ApiError::NotAccountOwner => (
                StatusCode::FORBIDDEN,
                Json(MessageResponse::new(SELF_ONLY_MESSAGE)),
            )
                .into_response(),
            ApiError::Store(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(e.detail())).into_response()
            }
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(msg)),
            )
                .into_response(),
        }
    }
}
