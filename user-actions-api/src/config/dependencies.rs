use std::sync::Arc;

use tracing::info;
use user_actions_analytics::UserActionsService;
use user_actions_repository::InMemoryActionsRepository;

use crate::config::ApiConfig;
use crate::errors::StartupError;

/// `Dependencies` struct holds the components the API server needs.
///
/// It includes the resolved configuration and the query service over the
/// fully loaded store.
pub struct Dependencies {
    pub config: ApiConfig,
    pub service: Arc<UserActionsService>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `StartupError` if the configuration is invalid or the record sources
    /// cannot be loaded.
    pub async fn new() -> Result<Self, StartupError> {
        let config = ApiConfig::from_env()?;
        Self::from_config(config).await
    }

    /// Creates a new `Dependencies` instance from an explicit configuration.
    ///
    /// The store is loaded completely before the service is built; a failure
    /// to read or parse either source leaves nothing behind.
    pub async fn from_config(config: ApiConfig) -> Result<Self, StartupError> {
        info!(
            listen_addr = %config.listen_addr,
            users_file = %config.users_file.display(),
            actions_file = %config.actions_file.display(),
            "Initializing dependencies"
        );

        let repository =
            InMemoryActionsRepository::from_files(&config.users_file, &config.actions_file)
                .await?;
        let service = UserActionsService::new(Arc::new(repository));

        Ok(Dependencies {
            config,
            service: Arc::new(service),
        })
    }
}
