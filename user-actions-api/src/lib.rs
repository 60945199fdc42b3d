//! # User Actions API
//!
//! HTTP service answering queries over a set of users and their actions.
//!
//! ## Endpoints
//!
//! - `GET /users/:id`: a single user
//! - `GET /users/:id/actions/count`: number of actions of a user
//! - `GET /actions/:type/next-probability`: distribution of the following action
//! - `GET /actions/next-probability?type=...`: same, with the type as a query parameter
//! - `GET /users/referral-index`: referral index of every referrer
//! - `GET /health`: liveness
//!
//! ## Modules
//!
//! - [`config`]: Environment configuration and dependency initialization
//! - [`errors`]: Startup and request error types
//! - [`server`]: Router, handlers and server loop

pub mod config;
pub mod errors;
pub mod server;

pub use config::{ApiConfig, Dependencies, LogFormat};
pub use errors::{ApiError, StartupError};
