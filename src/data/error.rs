//! Error types for data operations
//!
//! Provides unified error handling for CSV transcoding and column
//! preference decoding.

use thiserror::Error;

pub use crate::constants::{MAX_CSV_ROWS, MAX_CSV_SIZE_MB};

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// JSON error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is too large to import
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many data rows to import
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// Import path without a `.csv` extension
    #[error("Not a CSV file: {}", .0.display())]
    NotCsv(std::path::PathBuf),

    /// Input is empty
    #[error("Empty file")]
    EmptyFile,

    /// Header row has no fields
    #[error("No columns found")]
    NoColumns,

    /// Export could not be handed to the saver
    #[error("Save failed: {0}")]
    Storage(#[from] crate::storage::StorageError),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<String> for DataError {
    fn from(s: String) -> Self {
        DataError::Other(s)
    }
}

impl From<&str> for DataError {
    fn from(s: &str) -> Self {
        DataError::Other(s.to_string())
    }
}
