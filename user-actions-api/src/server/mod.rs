// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use user_actions_analytics::UserActionsService;

use self::state::AppState;
use crate::StartupError;
use crate::config::create_cors_layer;

/// Create the Axum application router with all routes and middleware
pub fn create_app(service: Arc<UserActionsService>, cors_origins: &[HeaderValue]) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/users/referral-index", get(handlers::referral_index))
        .route("/users/:id", get(handlers::get_user))
        .route("/users/:id/actions/count", get(handlers::count_user_actions))
        .route(
            "/actions/next-probability",
            get(handlers::next_action_probability_by_query),
        )
        .route(
            "/actions/:type/next-probability",
            get(handlers::next_action_probability),
        )
        .layer(create_cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server on the specified address until Ctrl+C is received
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), StartupError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", listener.local_addr()?);
    info!("- Users endpoint: http://{}/users/:id", addr);
    info!("- Referral index endpoint: http://{}/users/referral-index", addr);
    info!("- Health endpoint: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
