//! Centralized constants for the cf-describe workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Host Configuration File
// =============================================================================

/// Environment variable that relocates the host CLI's home directory.
pub const CF_HOME_VAR: &str = "CF_HOME";

/// Directory (under the home directory) holding the host CLI's state.
pub const CF_CONFIG_DIR: &str = ".cf";

/// File name of the host CLI's configuration inside [`CF_CONFIG_DIR`].
pub const CF_CONFIG_FILE: &str = "config.json";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_API: &str = "CF_DESCRIBE_API";
pub const ENV_ACCESS_TOKEN: &str = "CF_DESCRIBE_ACCESS_TOKEN";
pub const ENV_USERNAME: &str = "CF_DESCRIBE_USERNAME";
pub const ENV_SKIP_VERIFY: &str = "CF_DESCRIBE_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "CF_DESCRIBE_TIMEOUT";
pub const ENV_CONFIG_PATH: &str = "CF_DESCRIBE_CONFIG_PATH";
