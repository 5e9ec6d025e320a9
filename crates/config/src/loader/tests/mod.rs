//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

mod host_file_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// All variables the loader reads, set to `None` so `temp_env` clears them.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    use crate::constants::*;
    vec![
        (ENV_API, None),
        (ENV_ACCESS_TOKEN, None),
        (ENV_USERNAME, None),
        (ENV_SKIP_VERIFY, None),
        (ENV_TIMEOUT, None),
        (ENV_CONFIG_PATH, None),
        (CF_HOME_VAR, None),
    ]
}
