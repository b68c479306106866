//! Selector error types

use crate::clock::ClockError;
use thiserror::Error;

/// Errors that can occur while driving the time-range selector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An editing operation was attempted while the selector is closed
    #[error("Selector is not open")]
    NotOpen,

    /// The seed range could not be parsed
    #[error("Invalid seed range: {0}")]
    Clock(#[from] ClockError),
}

/// Result type alias for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_error_conversion() {
        let err: SelectorError = ClockError::Format("x".to_string()).into();
        assert!(matches!(err, SelectorError::Clock(_)));
        assert_eq!(SelectorError::NotOpen.to_string(), "Selector is not open");
    }
}
