//! Error types for weekender.

use thiserror::Error;

/// Errors that can occur in weekender operations.
#[derive(Error, Debug)]
pub enum WeekenderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Unknown quick-select preset '{0}'. Expected this-weekend, next-weekend or friday-night")]
    UnknownPreset(String),

    #[error("Unknown interest '{0}'. Available: {1}")]
    UnknownInterest(String, String),

    #[error("Invalid value '{value}' for {field}. Expected one of: {expected}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid itinerary request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for weekender operations.
pub type WeekenderResult<T> = Result<T, WeekenderError>;
