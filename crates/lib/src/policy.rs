//! Admin derivation policy
//!
//! Pure classification of a chosen display name into an administrator flag.
//! Called exactly once per identity creation; the result is frozen into the
//! [`Identity`](crate::Identity) so the designation cannot drift if the rule
//! ever changes mid-session.
//!
//! The substring rule is a deliberately naive stand-in for a real authorization
//! check. A multi-user deployment would need a server-verified role claim
//! instead of a client-trusted derivation.

/// Returns true iff the case-insensitive form of `name` contains `"admin"`.
///
/// Pure and deterministic, no side effects.
pub fn is_admin_name(name: &str) -> bool {
    name.to_lowercase().contains("admin")
}
