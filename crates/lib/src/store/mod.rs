//! Store implementations for identity persistence
//!
//! This module provides the `IdentityStore` trait and the store implementations.
//!
//! The trait defines the interface for persisting the single identity record.
//! This keeps the session logic independent of the specific storage mechanism
//! and lets tests substitute an in-memory fake for the file-backed store.

mod errors;
mod json_file;
mod memory;

pub use errors::StoreError;
pub use json_file::JsonFile;
pub use memory::InMemory;

use crate::Result;
use crate::identity::Identity;

/// Store trait abstracting durable persistence of exactly one identity record.
///
/// The record is scoped to the local environment: it survives a process restart
/// but is never shared across environments. There is a single logical writer per
/// environment, so implementations need no coordination beyond being safely
/// shareable (`Send + Sync`) behind an `Arc`.
///
/// ## Malformed data policy
///
/// A stored value that fails to parse as an [`Identity`] is treated as absence,
/// never as a fatal error. Corrupt local state must not crash startup or block
/// a new login; `load` discards it with a warning and returns `None`.
pub trait IdentityStore: Send + Sync {
    /// Retrieves the previously saved identity.
    ///
    /// Returns `Ok(None)` if no record exists or if the stored value does not
    /// parse into a valid identity.
    fn load(&self) -> Result<Option<Identity>>;

    /// Stores the identity, overwriting any existing record.
    ///
    /// A subsequent `load` in the same environment returns this identity.
    fn save(&self, identity: &Identity) -> Result<()>;

    /// Removes the record. A subsequent `load` returns `None`.
    ///
    /// Succeeds even if no record exists.
    fn clear(&self) -> Result<()>;
}
