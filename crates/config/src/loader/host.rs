//! Host CLI config file loading.
//!
//! Invariants:
//! - Host file settings are applied before environment variables.
//! - A missing host file is not an error; the values may come from elsewhere.
//! - The path is resolved as: explicit path, then `CF_DESCRIBE_CONFIG_PATH`,
//!   then the default host location.

use std::path::PathBuf;

use secrecy::SecretString;
use tracing::debug;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::ENV_CONFIG_PATH;
use crate::host_file::{HostConfigFile, default_host_config_path};

/// Apply settings from the host CLI's config file to the loader.
pub fn apply_host_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let path = match loader.config_path() {
        Some(path) => path.clone(),
        None => match env_var_or_none(ENV_CONFIG_PATH) {
            Some(path) => PathBuf::from(path),
            None => default_host_config_path()?,
        },
    };

    if !path.exists() {
        debug!(path = %path.display(), "Host config file not found, skipping");
        return Ok(());
    }

    let file = HostConfigFile::read(&path)?;
    debug!(path = %path.display(), "Loaded host config file");

    if let Some(target) = file.target.filter(|t| !t.trim().is_empty()) {
        loader.set_api_endpoint(Some(target));
    }
    if let Some(token) = file.access_token.filter(|t| !t.trim().is_empty()) {
        loader.set_access_token(Some(SecretString::new(token.into())));
    }
    if file.ssl_disabled {
        loader.set_skip_verify(Some(true));
    }
    Ok(())
}
