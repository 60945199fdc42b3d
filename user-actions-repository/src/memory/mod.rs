//! In-memory implementation of the actions repository.
//!
//! Records are loaded once from JSON files (or handed over directly) and kept
//! for the lifetime of the process.
mod actions_repository;
mod loader;

pub use actions_repository::InMemoryActionsRepository;
pub use loader::read_records;
