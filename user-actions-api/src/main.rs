//! User Actions API Main Entry Point
//!
//! Loads the users and actions record sources into memory and serves the
//! query endpoints over HTTP.

use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use user_actions_api::{Dependencies, LogFormat, StartupError, server};

/// Initialize tracing/logging.
fn init_tracing() -> Result<(), StartupError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "user_actions_api=info,user_actions_repository=info,user_actions_analytics=info,tower_http=info",
        )
    });

    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init(),
    }
    .map_err(|e| StartupError::config(format!("Failed to initialize tracing: {}", e)))?;

    info!(
        service_name = "user-actions-api",
        service_version = env!("CARGO_PKG_VERSION"),
        "Tracing initialized"
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing()?;

    info!("Starting User Actions API");

    let deps = match Dependencies::new().await {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let app = server::create_app(deps.service, &deps.config.cors_origins);

    match server::run_server(app, deps.config.listen_addr).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!(error = %e, "Server failed");
            Err(e)
        }
    }
}
