// App state for Axum server
use std::sync::Arc;

use user_actions_analytics::UserActionsService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<UserActionsService>,
}
