//! The chat facade driven by the presentation layer.
//!
//! Composes a [`Session`] and a seeded [`MessageLog`] behind the four user
//! intents the core accepts: submit a login name, submit a message, request a
//! logout, and read the renderable state. The core never calls back into the
//! presentation layer.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::identity::Identity;
use crate::log::{LogError, Message, MessageLog};
use crate::session::Session;
use crate::store::IdentityStore;
use crate::Result;

/// Renderable state snapshot: the active identity (if any) plus the full
/// message sequence in insertion order.
#[derive(Debug)]
pub struct ChatState<'a> {
    /// The active identity, `None` while Anonymous
    pub identity: Option<&'a Identity>,

    /// All messages in insertion order
    pub messages: &'a [Message],
}

/// The chat core: one session, one message log.
pub struct Chat {
    session: Session,
    log: MessageLog,
}

impl Chat {
    /// Open the chat core against the given identity store, using system time.
    ///
    /// Resumes a persisted identity if the store holds one; the message log
    /// starts with the fixed demonstration messages.
    pub fn open(store: Arc<dyn IdentityStore>) -> Result<Self> {
        Self::open_with_clock(store, Arc::new(SystemClock))
    }

    /// Open with an injected clock. Intended for tests needing deterministic
    /// timestamps.
    pub fn open_with_clock(store: Arc<dyn IdentityStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            session: Session::open(store)?,
            log: MessageLog::seeded(clock),
        })
    }

    /// Claim a display name, creating and persisting a new identity.
    ///
    /// See [`Session::login`] for trimming and validation behavior.
    pub fn submit_login(&mut self, name: &str) -> Result<Identity> {
        self.session.login(name)
    }

    /// Send a message attributed to the active identity.
    ///
    /// Fails with [`LogError::NoActiveIdentity`] while Anonymous — every
    /// message's author must equal the identity active at the moment of
    /// sending. Empty text fails with [`LogError::EmptyText`]. Either failure
    /// leaves the log unchanged.
    pub fn submit_message(&mut self, text: &str) -> Result<Message> {
        let author = self.session.current().ok_or(LogError::NoActiveIdentity)?;
        // Snapshot so the borrow of the session ends before the log mutation
        let author = author.clone();
        self.log.append(text, &author)
    }

    /// End the session, clearing the persisted identity. Idempotent.
    pub fn request_logout(&mut self) -> Result<()> {
        self.session.logout()
    }

    /// The current renderable state.
    pub fn state(&self) -> ChatState<'_> {
        ChatState {
            identity: self.session.current(),
            messages: self.log.all(),
        }
    }
}
