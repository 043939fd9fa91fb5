//! Shared helpers for the integration test suite.

use std::sync::Arc;

use gamechat::clock::FixedClock;
use gamechat::store::InMemory;
use gamechat::{Chat, Result};

/// Open a chat core over a fresh in-memory store with a deterministic clock.
pub fn open_fresh_chat() -> Result<Chat> {
    Chat::open_with_clock(Arc::new(InMemory::new()), Arc::new(FixedClock::default()))
}

/// Number of demonstration messages every log starts with.
pub const SEED_COUNT: usize = 2;
