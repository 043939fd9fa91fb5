//!
//! Gamechat: the session and message state core behind a single-session chat widget.
//! The presentation layer (out of scope here) renders this state and forwards user
//! intents back in through [`Chat`].
//!
//! ## Core Concepts
//!
//! * **Identity (`identity::Identity`)**: The record representing the current user
//!   (id, display name, admin flag). At most one is active per session.
//! * **Stores (`store::IdentityStore`)**: A pluggable persistence layer for the single
//!   identity record, surviving reloads of the host environment.
//! * **Session (`session::Session`)**: Owns the active identity and mediates
//!   login/logout, resuming a persisted identity on open.
//! * **Admin derivation (`policy`)**: The rule mapping a chosen name to an
//!   elevated-privilege flag, applied once at identity creation.
//! * **MessageLog (`log::MessageLog`)**: The ordered, append-only history of sent
//!   messages, each carrying an author snapshot taken at send time.
//! * **Chat (`chat::Chat`)**: The facade the presentation layer drives: submit a
//!   login, submit a message, request a logout, read the renderable state.

pub mod chat;
pub mod clock;
pub mod identity;
pub mod log;
pub mod policy;
pub mod session;
pub mod store;

pub use chat::{Chat, ChatState};
pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::Identity;
pub use log::{Message, MessageLog};
pub use session::Session;
pub use store::IdentityStore;

/// Result type used throughout the Gamechat library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Gamechat library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured persistence errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured session errors from the session module
    #[error(transparent)]
    Session(session::SessionError),

    /// Structured message log errors from the log module
    #[error(transparent)]
    Log(log::LogError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Store(_) => "store",
            Error::Session(_) => "session",
            Error::Log(_) => "log",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is a rejected user intent (empty name, empty message
    /// text, or a message submitted with no active identity).
    ///
    /// Validation failures leave prior state unchanged; the triggering intent can
    /// simply be retried with corrected input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_validation_error(),
            Error::Log(log_err) => log_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is persistence-related.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}
