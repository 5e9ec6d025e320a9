//! Host CLI configuration file.
//!
//! Responsibilities:
//! - Locate the host CLI's `config.json` (`$CF_HOME/.cf/config.json`, falling
//!   back to the user's home directory).
//! - Deserialize the subset of fields the plugin needs.
//!
//! Does NOT handle:
//! - Writing the file; the host CLI owns it.
//! - Merging with environment variables (see `loader`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{CF_CONFIG_DIR, CF_CONFIG_FILE, CF_HOME_VAR};
use crate::loader::{ConfigError, env_var_or_none};

/// Fields read from the host CLI's `config.json`.
///
/// Unknown fields are ignored; the host writes many more.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostConfigFile {
    /// Control-plane API endpoint (e.g. `https://api.example.com`).
    #[serde(rename = "Target", default)]
    pub target: Option<String>,
    /// Access token, stored as `bearer <jwt>`.
    #[serde(rename = "AccessToken", default)]
    pub access_token: Option<String>,
    /// Whether the user targeted the API with `--skip-ssl-validation`.
    #[serde(rename = "SSLDisabled", default)]
    pub ssl_disabled: bool,
}

impl HostConfigFile {
    /// Read and parse the host config file at `path`.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::HostFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::HostFileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the default path to the host CLI's configuration file.
///
/// - `$CF_HOME/.cf/config.json` when `CF_HOME` is set
/// - `~/.cf/config.json` otherwise
pub fn default_host_config_path() -> Result<PathBuf, ConfigError> {
    let home = match env_var_or_none(CF_HOME_VAR) {
        Some(cf_home) => PathBuf::from(cf_home),
        None => directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(ConfigError::HomeDirUnavailable)?,
    };
    Ok(home.join(CF_CONFIG_DIR).join(CF_CONFIG_FILE))
}
