//! Profile extractor for routes carrying a `:userId` path parameter

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts, Path},
    http::request::Parts,
};
use tracing::{error, warn};

use super::models::{User, UserId};
use crate::common::{ApiError, SharedState};

/// The user named by the `:userId` path parameter, loaded from the store
///
/// Resolution happens before the handler and before any authorization check,
/// so an unknown id is reported the same way `fetch_one` reports it.
#[derive(Debug, Clone)]
pub struct Profile(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for Profile
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<SharedState> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let Path(raw_id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                error!(error = %e, "Route has no userId path parameter");
                ApiError::InternalServer("missing userId path parameter".to_string())
            })?;

        let user_id = UserId::new(&raw_id);
        let users = state_lock.read().await.users.clone();

        match users.find_by_id(&user_id).await {
            Ok(Some(user)) => Ok(Profile(user)),
            Ok(None) => {
                warn!(user_id = %user_id, "Profile resolution failed: user not found");
                Err(ApiError::UserNotFound(user_id))
            }
            Err(e) => {
                error!(
                    error = %e,
                    user_id = %user_id,
                    "Store error during profile resolution"
                );
                Err(ApiError::UserNotFound(user_id))
            }
        }
    }
}
