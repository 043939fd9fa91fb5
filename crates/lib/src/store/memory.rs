//! In-memory identity store implementation
//!
//! Suitable for testing, development, or scenarios where identity persistence
//! is not required. This is the substitutable fake that lets session tests run
//! without touching the filesystem.

use std::sync::RwLock;

use crate::Result;
use crate::identity::Identity;

use super::IdentityStore;

/// A simple in-memory store holding the identity record behind a lock.
///
/// The record does not survive the process; use
/// [`JsonFile`](super::JsonFile) when reload persistence is needed.
#[derive(Debug, Default)]
pub struct InMemory {
    record: RwLock<Option<Identity>>,
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for InMemory {
    fn load(&self) -> Result<Option<Identity>> {
        let record = self.record.read().unwrap();
        Ok(record.clone())
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        let mut record = self.record.write().unwrap();
        *record = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut record = self.record.write().unwrap();
        *record = None;
        Ok(())
    }
}
