//! Message log
//!
//! The ordered, append-only history of messages sent during the session.
//! Messages are never mutated or removed, and insertion order is the only
//! defined order — no reordering by timestamp, no deduplication.

mod errors;

pub use errors::LogError;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::identity::Identity;
use crate::Result;

/// A single sent message.
///
/// The author is captured by value at send time: a later logout/login never
/// retroactively alters the attribution of past messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Opaque unique token, generated at send time
    pub id: String,

    /// Non-empty trimmed message text
    pub text: String,

    /// Author identity snapshot at send time
    pub author: Identity,

    /// Send time as milliseconds since Unix epoch
    pub timestamp: i64,
}

/// The append-only message log for the running session.
///
/// The log itself is not persisted; only the identity record survives a reload.
/// Two environments sharing one persisted identity therefore each hold an
/// independent log.
pub struct MessageLog {
    messages: Vec<Message>,
    clock: Arc<dyn Clock>,
}

impl MessageLog {
    /// Creates an empty log drawing timestamps from the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            messages: Vec::new(),
            clock,
        }
    }

    /// Creates a log preloaded with the fixed demonstration messages.
    ///
    /// The seeds go through the ordinary append path, so they obey the same
    /// invariants as real messages (non-empty text, valid author).
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let mut log = Self::new(clock);

        let player_one = Identity {
            id: "admin".to_string(),
            name: "PlayerOne".to_string(),
            is_admin: true,
        };
        let gamer_x = Identity {
            id: "user1".to_string(),
            name: "GamerX".to_string(),
            is_admin: false,
        };

        // Seed appends cannot fail: text is non-empty by construction
        let _ = log.append("GG everyone, that was close one!", &player_one);
        let _ = log.append("Totally agree! Great game 🎮", &gamer_x);
        log
    }

    /// Appends a message authored by the given identity.
    ///
    /// The text is trimmed; an empty trimmed text fails with
    /// [`LogError::EmptyText`] and leaves the log unchanged. Otherwise a message
    /// is constructed with a fresh id, the clock's current time, and an author
    /// snapshot, then appended to the end of the log. Returns the appended
    /// message.
    pub fn append(&mut self, text: &str, author: &Identity) -> Result<Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LogError::EmptyText.into());
        }

        let message = Message {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            author: author.clone(),
            timestamp: self.clock.now_millis(),
        };
        tracing::debug!(author = %message.author.name, "message appended");
        self.messages.push(message.clone());
        Ok(message)
    }

    /// The full log in insertion order, as a read-only view.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
