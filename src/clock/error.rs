//! Clock error types

use thiserror::Error;

/// Errors raised while converting clock strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The input is not `HH:MM` with integer components
    #[error("Invalid clock string: {0:?} (expected HH:MM)")]
    Format(String),
}

/// Result type alias for clock operations
pub type ClockResult<T> = Result<T, ClockError>;
