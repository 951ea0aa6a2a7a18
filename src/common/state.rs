// Application state shared across all modules

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::common::dev_mode::DevModeConfig;
use crate::users::store::UserStore;

/// Application state containing the user store and configuration
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub jwt_secret: String,
    pub dev_mode: DevModeConfig,
}

/// The form in which `AppState` travels through the router as an `Extension`
pub type SharedState = Arc<RwLock<AppState>>;

impl AppState {
    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }
}
