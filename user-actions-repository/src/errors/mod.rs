//! Error types for the user actions repository.
//! Consolidates and re-exports error types related to repository operations.
mod actions;

pub use actions::ActionsRepositoryError;
