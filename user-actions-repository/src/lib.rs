//! # User Actions Repository
//! This crate provides the trait and the in-memory implementation backing the
//! user actions store. It includes definitions for errors, interfaces, and the
//! JSON-file loader used to populate the store at startup.
pub mod errors;
pub mod interfaces;
pub mod memory;

pub use errors::ActionsRepositoryError;
pub use interfaces::ActionsRepository;
pub use memory::InMemoryActionsRepository;
