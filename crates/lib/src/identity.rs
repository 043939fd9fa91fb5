//! The identity record for the current user.

use serde::{Deserialize, Serialize};

use crate::policy;

/// The record representing the current user.
///
/// Created on successful login, persisted immediately through an
/// [`IdentityStore`](crate::store::IdentityStore), and destroyed on logout.
/// At most one identity is active per session.
///
/// The admin flag is computed once at creation from the chosen name and is
/// immutable for the lifetime of the identity instance. Messages capture the
/// identity by value, so a later logout/login never rewrites past attribution.
///
/// Field names serialize in camelCase to match the persisted record layout:
/// `{ "id": ..., "name": ..., "isAdmin": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Opaque unique token, generated at creation time
    pub id: String,

    /// Non-empty trimmed display name, user-supplied
    pub name: String,

    /// Administrator designation, derived from the name at creation
    pub is_admin: bool,
}

impl Identity {
    /// Create a new identity with a fresh id, deriving the admin flag from the name.
    ///
    /// The caller is responsible for trimming and rejecting empty names; this
    /// constructor freezes the admin derivation, which must happen exactly once.
    pub(crate) fn create(name: impl Into<String>) -> Self {
        let name = name.into();
        let is_admin = policy::is_admin_name(&name);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            is_admin,
        }
    }
}
