//! Storage error types
//!
//! Errors that can occur while bulk-loading the booking store. Individual
//! record problems never appear here; they are absorbed by normalization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The source file could not be opened or read
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream could not be read at all
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source has no header row to name its columns
    #[error("Missing header row")]
    MissingHeader,
}

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
