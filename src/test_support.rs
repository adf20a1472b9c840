//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;

/// Seed used by every test app so shuffles are reproducible.
pub const TEST_SEED: u64 = 0x5eed;

/// Creates a test App with a fixed shuffle seed.
pub fn test_app() -> App {
    App::new(Some(TEST_SEED))
}
