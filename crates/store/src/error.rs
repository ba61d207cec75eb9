//! Error types for the record store

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while persisting or loading collections
///
/// Read and parse failures during `load` are deliberately not represented
/// here: they are logged and folded to an empty collection so the caller can
/// keep going.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to create the data directory
    #[error("Failed to create data directory at {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a collection or counter file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a collection or counter file
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize records to JSON
    #[error("Failed to serialize records: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}
