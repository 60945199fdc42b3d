//! Error types for the actions repository.
//! Defines the errors that can occur while loading the record sources.
use std::path::PathBuf;

use thiserror::Error;

/// Represents errors that can occur within the actions repository.
///
/// Both variants are raised while loading a record source and carry the path
/// of the offending file.
#[derive(Debug, Error)]
pub enum ActionsRepositoryError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
