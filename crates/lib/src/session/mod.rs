//! Session management
//!
//! Owns the single active [`Identity`] for the running session and mediates
//! login/logout against an injected [`IdentityStore`].

mod errors;

pub use errors::SessionError;

use std::sync::Arc;

use crate::identity::Identity;
use crate::store::IdentityStore;
use crate::Result;

/// The session state machine: Anonymous until a login succeeds, Authenticated
/// until logout.
///
/// Opening a session attempts to resume the identity persisted by a previous
/// run; a fresh environment starts Anonymous. All transitions are synchronous
/// and total — persistence access is immediate local I/O with no pending state.
pub struct Session {
    /// Persistence for the identity record
    store: Arc<dyn IdentityStore>,

    /// The active identity, `None` while Anonymous
    current: Option<Identity>,
}

impl Session {
    /// Open a session against the given store.
    ///
    /// If the store holds a previously saved identity the session resumes
    /// directly into the Authenticated state with that identity. Otherwise it
    /// starts Anonymous. A malformed stored record is treated as absence by the
    /// store, so a corrupt environment also starts Anonymous rather than
    /// failing.
    pub fn open(store: Arc<dyn IdentityStore>) -> Result<Self> {
        let current = store.load()?;
        if let Some(identity) = &current {
            tracing::debug!(name = %identity.name, "resumed persisted session");
        }
        Ok(Self { store, current })
    }

    /// Log in with the given raw display name.
    ///
    /// The name is trimmed; an empty trimmed name fails with
    /// [`SessionError::EmptyName`] and leaves the session state unchanged.
    /// Otherwise a new identity is created (fresh id, admin flag derived from
    /// the name), persisted through the store, and made the active identity.
    /// Returns the created identity.
    ///
    /// Logging in while already Authenticated replaces the previous identity;
    /// the store record is overwritten by the save.
    pub fn login(&mut self, raw_name: &str) -> Result<Identity> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName.into());
        }

        let identity = Identity::create(name);
        self.store.save(&identity)?;
        tracing::debug!(name = %identity.name, is_admin = identity.is_admin, "logged in");
        self.current = Some(identity.clone());
        Ok(identity)
    }

    /// Log out, clearing the identity from the store and from memory.
    ///
    /// Idempotent: calling logout while Anonymous is a no-op, not an error.
    pub fn logout(&mut self) -> Result<()> {
        if self.current.is_none() {
            return Ok(());
        }
        self.store.clear()?;
        self.current = None;
        tracing::debug!("logged out");
        Ok(())
    }

    /// The active identity, or `None` while Anonymous.
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Whether an identity is currently active.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
