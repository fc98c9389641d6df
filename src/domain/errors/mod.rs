// Domain errors - Error types for the domain layer

use std::fmt;

/// Reasons a clip selection is refused before any request is issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Start or end bound has not been marked
    Incomplete,
    /// End bound is at or before the start bound
    NonPositiveDuration,
    /// Clip exceeds the maximum allowed length
    TooLong { minutes: i64, seconds: i64 },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::Incomplete => write!(f, "Please set both start and end times"),
            SelectionError::NonPositiveDuration => write!(f, "End time must be after start time"),
            SelectionError::TooLong { minutes, seconds } => write!(
                f,
                "Clip duration cannot exceed 45 minutes. Current duration: {}m {}s",
                minutes, seconds
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Time text is not `HH:MM:SS`
    InvalidFormat(String),
    /// No video identifier could be extracted
    InvalidUrl(String),
    /// Player action attempted before readiness
    NotReady,
    /// Selection validation failed
    Selection(SelectionError),
    /// A download is already in flight
    Busy,
    /// Writing the downloaded clip failed
    Save(String),
    /// Configuration is unusable
    Config(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidFormat(msg) => write!(f, "Invalid time format: {}", msg),
            DomainError::InvalidUrl(msg) => write!(f, "{}", msg),
            DomainError::NotReady => write!(f, "Player is not ready"),
            DomainError::Selection(err) => write!(f, "{}", err),
            DomainError::Busy => write!(f, "A clip download is already in progress"),
            DomainError::Save(msg) => write!(f, "Failed to save clip: {}", msg),
            DomainError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<SelectionError> for DomainError {
    fn from(err: SelectionError) -> Self {
        DomainError::Selection(err)
    }
}
