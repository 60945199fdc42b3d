//! This module defines and re-exports the interfaces for the actions repository.
//! It serves as a central point for accessing traits related to data access.
mod actions;

pub use actions::ActionsRepository;
