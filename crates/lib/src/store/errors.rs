//! Error types for the identity stores.
//!
//! Note that a persisted record that fails to parse is *not* an error: stores
//! treat it as absence (see [`IdentityStore::load`](super::IdentityStore::load)).
//! These variants cover genuine I/O and write-side serialization failures.

use thiserror::Error;

/// Errors that can occur during store operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serializing the identity record for storage failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            StoreError::FileIo { .. } | StoreError::SerializationFailed { .. }
        )
    }
}

// Conversion from StoreError to the main Error type
impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
