//! Builder for constructing [`HttpConnection`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for connection configuration
//! - Validating required configuration (api_endpoint, access_token)
//! - Normalizing the API endpoint (removing trailing slashes) and token
//!   (removing the host's `bearer ` prefix)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)

use std::time::Duration;

use cf_config::{Config, constants::DEFAULT_TIMEOUT_SECS, strip_bearer_prefix};
use secrecy::{ExposeSecret, SecretString};

use crate::client::HttpConnection;
use crate::error::{ClientError, Result};

/// Maximum number of HTTP redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// Builder for creating a new [`HttpConnection`].
pub struct HttpConnectionBuilder {
    api_endpoint: Option<String>,
    access_token: Option<SecretString>,
    username: Option<String>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for HttpConnectionBuilder {
    fn default() -> Self {
        Self {
            api_endpoint: None,
            access_token: None,
            username: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConnectionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API endpoint, e.g. `https://api.sys.example.com`.
    pub fn api_endpoint(mut self, url: String) -> Self {
        self.api_endpoint = Some(url);
        self
    }

    /// Set the access token. A leading `bearer ` is accepted and stripped.
    pub fn access_token(mut self, token: String) -> Self {
        self.access_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the username reported by [`CliConnection::username`](crate::CliConnection::username).
    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against development foundations with self-signed
    /// certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a builder pre-configured from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_endpoint = Some(config.connection.api_endpoint.clone());
        self.access_token = Some(config.auth.access_token.clone());
        self.username = config.auth.username.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`HttpConnection`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `api_endpoint` was not provided.
    /// Returns [`ClientError::InvalidConfig`] if the access token is missing.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<HttpConnection> {
        let api_endpoint = self
            .api_endpoint
            .ok_or_else(|| ClientError::InvalidUrl("api_endpoint is required".to_string()))?;
        let api_endpoint = api_endpoint.trim_end_matches('/').to_string();

        let token = self
            .access_token
            .ok_or_else(|| ClientError::InvalidConfig("access_token is required".to_string()))?;
        let access_token = SecretString::new(strip_bearer_prefix(token.expose_secret()).into());

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));

        if self.skip_verify {
            if api_endpoint.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        Ok(HttpConnection {
            http: http_builder.build()?,
            api_endpoint,
            access_token,
            username: self.username,
        })
    }
}
