//! Error types for the User Actions API.
//! Startup errors abort the process; request errors are rendered as JSON
//! responses with an appropriate status code.
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};
use user_actions_analytics::AnalyticsError;
use user_actions_repository::ActionsRepositoryError;

/// Errors that can occur while starting the service.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record sources could not be loaded.
    #[error("Repository error: {0}")]
    Repository(#[from] ActionsRepositoryError),

    /// Binding or serving the HTTP listener failed.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl StartupError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The user id path segment is not an integer.
    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

impl ApiError {
    /// Status code and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidUserId(_) => (StatusCode::BAD_REQUEST, "Invalid user ID"),
            Self::Analytics(err) => match err {
                AnalyticsError::ActionTypeRequired => {
                    (StatusCode::BAD_REQUEST, "Action type is required")
                }
                AnalyticsError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
                AnalyticsError::NoActions => (StatusCode::NOT_FOUND, "No actions found"),
                AnalyticsError::NoReferrals => (StatusCode::NOT_FOUND, "No referrals found"),
                AnalyticsError::Repository(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
