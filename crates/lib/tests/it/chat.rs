//! End-to-end tests driving the Chat facade through the four user intents.

use std::sync::Arc;

use gamechat::clock::FixedClock;
use gamechat::store::InMemory;
use gamechat::Chat;

use crate::helpers::{open_fresh_chat, SEED_COUNT};

#[test]
fn fresh_environment_is_anonymous_with_seeds_only() {
    let chat = open_fresh_chat().unwrap();
    let state = chat.state();

    assert!(state.identity.is_none());
    assert_eq!(state.messages.len(), SEED_COUNT);
    assert_eq!(state.messages[0].author.name, "PlayerOne");
    assert_eq!(state.messages[1].author.name, "GamerX");
}

#[test]
fn login_then_message_then_logout() {
    let mut chat = open_fresh_chat().unwrap();

    let identity = chat.submit_login("SuperAdmin99").unwrap();
    assert!(identity.is_admin);

    let message = chat.submit_message("hello everyone").unwrap();
    assert_eq!(message.author, identity);
    assert_eq!(chat.state().messages.len(), SEED_COUNT + 1);

    chat.request_logout().unwrap();
    assert!(chat.state().identity.is_none());
    // The log is not tied to the identity lifecycle
    assert_eq!(chat.state().messages.len(), SEED_COUNT + 1);
}

#[test]
fn admin_derivation_scenarios() {
    let mut chat = open_fresh_chat().unwrap();
    assert!(chat.submit_login("SuperAdmin99").unwrap().is_admin);
    assert!(!chat.submit_login("GamerX").unwrap().is_admin);
}

#[test]
fn message_while_anonymous_is_rejected() {
    let mut chat = open_fresh_chat().unwrap();
    let err = chat.submit_message("hello?").unwrap_err();

    assert!(err.is_validation_error());
    assert_eq!(chat.state().messages.len(), SEED_COUNT);
}

#[test]
fn empty_message_is_rejected() {
    let mut chat = open_fresh_chat().unwrap();
    chat.submit_login("PlayerTwo").unwrap();

    let err = chat.submit_message("   ").unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(chat.state().messages.len(), SEED_COUNT);
}

#[test]
fn empty_login_is_rejected() {
    let mut chat = open_fresh_chat().unwrap();
    let err = chat.submit_login("  \t ").unwrap_err();

    assert!(err.is_validation_error());
    assert!(chat.state().identity.is_none());
}

#[test]
fn logout_is_idempotent() {
    let mut chat = open_fresh_chat().unwrap();
    chat.submit_login("PlayerTwo").unwrap();

    chat.request_logout().unwrap();
    chat.request_logout().unwrap();
    assert!(chat.state().identity.is_none());
}

#[test]
fn attribution_survives_relogin() {
    let mut chat = open_fresh_chat().unwrap();

    let first = chat.submit_login("SuperAdmin99").unwrap();
    chat.submit_message("first message").unwrap();

    chat.request_logout().unwrap();
    let second = chat.submit_login("GamerX").unwrap();
    chat.submit_message("second message").unwrap();

    let state = chat.state();
    let sent = &state.messages[SEED_COUNT..];
    assert_eq!(sent[0].author.name, "SuperAdmin99");
    assert!(sent[0].author.is_admin);
    assert_eq!(sent[1].author.name, "GamerX");
    assert!(!sent[1].author.is_admin);
    assert_ne!(first.id, second.id);
}

#[test]
fn session_resumes_from_shared_store() {
    let store = Arc::new(InMemory::new());
    let identity = {
        let mut chat =
            Chat::open_with_clock(store.clone(), Arc::new(FixedClock::default())).unwrap();
        chat.submit_login("PlayerOne").unwrap()
    };

    let chat = Chat::open_with_clock(store, Arc::new(FixedClock::default())).unwrap();
    let state = chat.state();
    assert_eq!(state.identity, Some(&identity));
    // The message log is per-environment and starts over with the seeds
    assert_eq!(state.messages.len(), SEED_COUNT);
}

#[test]
fn messages_keep_insertion_order() {
    let clock = Arc::new(FixedClock::default());
    let mut chat = Chat::open_with_clock(Arc::new(InMemory::new()), clock.clone()).unwrap();
    chat.submit_login("PlayerOne").unwrap();

    // Held clock gives every message the same timestamp
    let _hold = clock.hold();
    chat.submit_message("m1").unwrap();
    chat.submit_message("m2").unwrap();
    chat.submit_message("m3").unwrap();

    let texts: Vec<_> = chat.state().messages[SEED_COUNT..]
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(texts, ["m1", "m2", "m3"]);
}
