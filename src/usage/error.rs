//! Usage data error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by usage providers
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Failed to read usage fixture {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse usage fixture {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Result type alias for usage operations
pub type UsageResult<T> = Result<T, UsageError>;
