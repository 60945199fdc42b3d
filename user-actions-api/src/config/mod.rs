//! Configuration module for the User Actions API.
//! Reads settings from the environment and wires up the application dependencies.
mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{
    ApiConfig, DEFAULT_ACTIONS_FILE, DEFAULT_LISTEN_ADDR, DEFAULT_USERS_FILE, LogFormat,
    create_cors_layer,
};
