//! File-backed identity store implementation
//!
//! Persists the identity record as a single JSON file so it survives a reload
//! of the host environment. The stored layout is the record's serde form:
//! `{ "id": ..., "name": ..., "isAdmin": ... }`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::identity::Identity;

use super::{IdentityStore, StoreError};

/// Identity store backed by a single JSON file at a configured path.
///
/// A missing file is an empty store. A file whose contents do not parse as an
/// identity record is treated the same way: `load` logs a warning, returns
/// `None`, and the next `save` overwrites the corrupt contents. Corrupt local
/// state never blocks startup or a new login.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Creates a store persisting to the given file path.
    ///
    /// The file is not created until the first `save`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityStore for JsonFile {
    fn load(&self) -> Result<Option<Identity>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::FileIo { source: e }.into()),
        };
        match serde_json::from_str(&json) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                // Malformed data is absence, not a fatal error
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding unparsable identity record"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        let json = serde_json::to_string_pretty(identity)
            .map_err(|e| StoreError::SerializationFailed { source: e })?;
        fs::write(&self.path, json).map_err(|e| StoreError::FileIo { source: e }.into())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::FileIo { source: e }.into()),
        }
    }
}
