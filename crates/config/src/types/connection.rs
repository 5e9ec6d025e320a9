//! Connection configuration types for cf-describe.
//!
//! Responsibilities:
//! - Define connection settings (API endpoint, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Invariants:
//! - `api_endpoint` never ends with a slash.

use std::time::Duration;

use crate::types::auth::AuthConfig;

/// Connection configuration for the control-plane API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the control-plane API (e.g., https://api.example.com)
    pub api_endpoint: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}
