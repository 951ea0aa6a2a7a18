// src/users/handlers.rs

use axum::extract::{Extension, Json, Query};
use tracing::{error, info, warn};

use super::extractors::Profile;
use super::models::User;
use super::store::UserStore;
use crate::auth::SessionUser;
use crate::common::{ApiError, Jsonp, JsonpQuery, MessageResponse, SharedState};

// ============================================================================
// PROFILE OPERATIONS
// ============================================================================

/// Outcome of `authorize_self`
#[derive(Debug)]
pub enum Authorization {
    Allow,
    /// Carries the 403 to send; the caller must not continue the pipeline
    Deny(ApiError),
}

/// Re-reads the profile's record from the store
///
/// A missing record and a failed lookup both answer with the same message.
pub async fn fetch_one(store: &dyn UserStore, profile: &User) -> Result<Json<User>, ApiError> {
    let user_id = &profile.id;

    match store.find_by_id(user_id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => {
            warn!(user_id = %user_id, "User lookup failed: user not found");
            Err(ApiError::UserNotFound(user_id.clone()))
        }
        Err(e) => {
            error!(
                error = %e,
                user_id = %user_id,
                "Store error during user lookup"
            );
            Err(ApiError::UserNotFound(user_id.clone()))
        }
    }
}

pub fn fetch_current(current: Option<User>) -> Result<Json<User>, ApiError> {
    current.map(Json).ok_or(ApiError::NoUserDetected)
}

pub async fn remove_one(
    store: &dyn UserStore,
    profile: &User,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = store.remove_by_id(&profile.id).await.map_err(|e| {
        error!(
            error = %e,
            user_id = %profile.id,
            "Store error deleting user"
        );
        ApiError::Store(e)
    })?;

    info!(user_id = %profile.id, removed, "User deleted");

    Ok(Json(MessageResponse::success()))
}

/// Allows only when the signed-in user is the profile being acted on
pub fn authorize_self(current: Option<&User>, profile: &User) -> Authorization {
    match current {
        Some(user) if user.id == profile.id => Authorization::Allow,
        Some(user) => {
            warn!(
                user_id = %user.id,
                target_user_id = %profile.id,
                "Account change denied: signed-in user does not own the account"
            );
            Authorization::Deny(ApiError::NotAccountOwner)
        }
        None => {
            warn!(
                target_user_id = %profile.id,
                "Account change denied: no signed-in user"
            );
            Authorization::Deny(ApiError::NotAccountOwner)
        }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

// Success bodies honour `?callback=` (JSONP); error bodies never do.

/// GET /users/:userId - Get a single user
pub async fn get_user_handler(
    Extension(state_lock): Extension<SharedState>,
    Query(jsonp): Query<JsonpQuery>,
    Profile(profile): Profile,
) -> Result<Jsonp<User>, ApiError> {
    let users = state_lock.read().await.users.clone();
    let Json(user) = fetch_one(users.as_ref(), &profile).await?;
    Ok(Jsonp::new(jsonp.callback.as_deref(), user))
}

/// GET /users/me - Get the signed-in user
pub async fn me_handler(
    Query(jsonp): Query<JsonpQuery>,
    SessionUser(current): SessionUser,
) -> Result<Jsonp<User>, ApiError> {
    let Json(user) = fetch_current(current)?;
    Ok(Jsonp::new(jsonp.callback.as_deref(), user))
}

/// DELETE /users/:userId - Delete a user, only allowed on one's own account
pub async fn delete_user_handler(
    Extension(state_lock): Extension<SharedState>,
    Query(jsonp): Query<JsonpQuery>,
    SessionUser(current): SessionUser,
    Profile(profile): Profile,
) -> Result<Jsonp<MessageResponse>, ApiError> {
    if let Authorization::Deny(rejection) = authorize_self(current.as_ref(), &profile) {
        return Err(rejection);
    }

    info!(user_id = %profile.id, "User delete request authorized");

    let users = state_lock.read().await.users.clone();
    let Json(message) = remove_one(users.as_ref(), &profile).await?;
    Ok(Jsonp::new(jsonp.callback.as_deref(), message))
}
