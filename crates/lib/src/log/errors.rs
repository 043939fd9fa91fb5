//! Error types for the message log
use thiserror::Error;

/// Errors that can occur during message log operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LogError {
    /// The message text was empty after trimming.
    #[error("Message text must not be empty")]
    EmptyText,

    /// A message was submitted while no identity was active.
    #[error("Sending a message requires an active identity")]
    NoActiveIdentity,
}

impl LogError {
    /// Check if this error is a rejected user intent.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, LogError::EmptyText | LogError::NoActiveIdentity)
    }
}

// Conversion from LogError to the main Error type
impl From<LogError> for crate::Error {
    fn from(err: LogError) -> Self {
        crate::Error::Log(err)
    }
}
