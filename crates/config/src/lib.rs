//! Configuration management for cf-describe.
//!
//! This crate resolves the control-plane target and credentials from the
//! host CLI's configuration file, environment variables, and explicit
//! overrides, and validates the result.

pub mod constants;
pub mod host_file;
mod loader;
pub mod token;
pub mod types;

pub use host_file::{HostConfigFile, default_host_config_path};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use token::{strip_bearer_prefix, username_from_token};
pub use types::{AuthConfig, Config, ConnectionConfig};
