//! Error types for the session system
use thiserror::Error;

/// Errors that can occur during session operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
    /// The login name was empty after trimming.
    #[error("Login name must not be empty")]
    EmptyName,
}

impl SessionError {
    /// Check if this error is a rejected user intent.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SessionError::EmptyName)
    }
}

// Conversion from SessionError to the main Error type
impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
