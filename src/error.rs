//! Error types for date-time formatting, parsing and difference operations.

/// Every failure the library can report.
///
/// All variants carry a human-readable message naming the argument or
/// condition that triggered the failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl DateTimeError {
    /// Shorthand for a missing or empty required argument.
    pub fn missing(name: &str) -> Self {
        Self::InvalidArgument(format!("{} cannot be null or empty", name))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DateTimeError>;
