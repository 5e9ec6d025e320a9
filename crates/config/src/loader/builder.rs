//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the host config file, environment variables, and direct
//!   builder methods.
//! - Build and validate the final `Config`.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over host config file values.
//! - Builder methods take precedence over environment variables only when
//!   applied after `from_env()`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::host::apply_host_file;
use crate::constants::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from the host file, env vars and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    api_endpoint: Option<String>,
    access_token: Option<SecretString>,
    username: Option<String>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the host config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read target, token and TLS settings from the host CLI's config file.
    pub fn from_host_file(mut self) -> Result<Self, ConfigError> {
        apply_host_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API endpoint.
    pub fn with_api_endpoint(mut self, url: String) -> Self {
        self.api_endpoint = Some(url);
        self
    }

    /// Set the access token.
    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the display username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_endpoint = self
            .api_endpoint
            .as_deref()
            .map(validate_and_normalize_api_endpoint)
            .transpose()?
            .ok_or(ConfigError::MissingApiEndpoint)?;

        let access_token = self.access_token.ok_or(ConfigError::MissingAccessToken)?;
        let auth = AuthConfig::new(access_token.expose_secret(), self.username);
        if auth.access_token.expose_secret().is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig {
                api_endpoint,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth,
        })
    }

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_api_endpoint(&mut self, url: Option<String>) {
        self.api_endpoint = url;
    }

    pub(crate) fn set_access_token(&mut self, token: Option<SecretString>) {
        self.access_token = token;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let timeout_secs = timeout.as_secs();

    if timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }

    if timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }

    Ok(())
}

fn validate_and_normalize_api_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingApiEndpoint);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "api_endpoint".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "api_endpoint".into(),
            message: format!(
                "scheme must be http or https (e.g. https://api.example.com), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "api_endpoint".into(),
            message: "host is required (e.g. https://api.example.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
