/*! Integration tests for Gamechat.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - chat: End-to-end tests driving the Chat facade through the user intents
 * - store: Tests exercising the file-backed store across simulated reloads
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("gamechat=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod chat;
mod helpers;
