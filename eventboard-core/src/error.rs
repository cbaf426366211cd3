//! Error types for eventboard.

use thiserror::Error;

use crate::datetime::DateTimeError;
use crate::document::DecodeError;

/// Errors that can occur in eventboard operations.
#[derive(Error, Debug)]
pub enum EventBoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Remote service error: {0}")]
    Remote(String),

    #[error("Malformed document: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid event: {0}")]
    Validation(String),

    #[error(transparent)]
    DateTime(#[from] DateTimeError),
}

impl EventBoardError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EventBoardError::NotFound(_))
    }
}

impl From<reqwest::Error> for EventBoardError {
    fn from(err: reqwest::Error) -> Self {
        EventBoardError::Remote(err.to_string())
    }
}

/// Result type alias for eventboard operations.
pub type EventBoardResult<T> = Result<T, EventBoardError>;
