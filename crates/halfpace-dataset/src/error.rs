//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading historical results
#[derive(Error, Debug)]
pub enum DatasetError {
    /// No source files were configured
    #[error("No dataset files configured")]
    NoSources,

    /// A source file could not be opened
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        /// Path of the file
        path: PathBuf,
        /// Underlying error
        source: csv::Error,
    },

    /// A source has no header row
    #[error("Missing header row in {0}")]
    MissingHeader(String),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
