//! Environment-driven settings.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use crate::StartupError;

/// Default socket address of the HTTP server.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default path of the users record source.
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Default path of the actions record source.
pub const DEFAULT_ACTIONS_FILE: &str = "actions.json";

/// Origins allowed by CORS when `CORS_ALLOWED_ORIGINS` is not set.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:5173,http://127.0.0.1:3000,http://127.0.0.1:5173";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable console output.
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parse the log format from the `LOG_FORMAT` environment variable.
    ///
    /// Valid values: "json" or "pretty" (case-insensitive).
    /// Defaults to "pretty" if not set or invalid.
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Settings of the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// JSON array of users.
    pub users_file: PathBuf,
    /// JSON array of actions.
    pub actions_file: PathBuf,
    /// Origins allowed to call the API from a browser.
    pub cors_origins: Vec<HeaderValue>,
}

impl ApiConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LISTEN_ADDR`: Socket address to bind (default: 0.0.0.0:8080)
    /// - `USERS_FILE`: Users JSON file (default: users.json)
    /// - `ACTIONS_FILE`: Actions JSON file (default: actions.json)
    /// - `CORS_ALLOWED_ORIGINS`: Comma separated origins (default: local dev servers)
    ///
    /// # Returns
    ///
    /// * `Ok(ApiConfig)` - Parsed configuration
    /// * `Err(StartupError::Config)` - If `LISTEN_ADDR` or an origin is malformed
    pub fn from_env() -> Result<Self, StartupError> {
        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr.parse::<SocketAddr>().map_err(|e| {
            StartupError::config(format!("Invalid LISTEN_ADDR '{}': {}", listen_addr, e))
        })?;

        let users_file =
            env::var("USERS_FILE").unwrap_or_else(|_| DEFAULT_USERS_FILE.to_string());
        let actions_file =
            env::var("ACTIONS_FILE").unwrap_or_else(|_| DEFAULT_ACTIONS_FILE.to_string());

        let cors_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string());
        let cors_origins = parse_origins(&cors_origins)?;

        Ok(Self {
            listen_addr,
            users_file: PathBuf::from(users_file),
            actions_file: PathBuf::from(actions_file),
            cors_origins,
        })
    }
}

/// Parse a comma separated origin list, ignoring empty entries.
fn parse_origins(origins: &str) -> Result<Vec<HeaderValue>, StartupError> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                StartupError::config(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect()
}

/// Create the CORS layer for the configured origins.
pub fn create_cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins.to_vec())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
