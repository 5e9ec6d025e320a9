//! Configuration type definitions for cf-describe.
//!
//! Responsibilities:
//! - Define the resolved connection and authentication settings.
//! - Keep the access token wrapped in `secrecy::SecretString`.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections (see client crate).

mod auth;
pub(crate) mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
