//! Authentication types for cf-describe configuration.
//!
//! Responsibilities:
//! - Hold the control-plane access token and the optional display username.
//! - Normalize the host's `bearer <token>` storage format.
//!
//! Does NOT handle:
//! - Token acquisition or refresh (owned by the host CLI's login flow).
//!
//! Invariants:
//! - The access token is stored without any `bearer ` prefix.
//! - The token is never printed by `Debug`.

use secrecy::{ExposeSecret, SecretString};

use crate::token::{strip_bearer_prefix, username_from_token};

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// OAuth access token sent as `Authorization: bearer <token>`.
    pub access_token: SecretString,
    /// Explicit username override; when absent it is derived from the token.
    pub username: Option<String>,
}

impl AuthConfig {
    /// Create an auth config, stripping a leading `bearer ` from the token.
    pub fn new(access_token: &str, username: Option<String>) -> Self {
        Self {
            access_token: SecretString::new(strip_bearer_prefix(access_token).into()),
            username,
        }
    }

    /// The username the report is attributed to.
    ///
    /// Returns the explicit username if configured, otherwise the `user_name`
    /// claim of the access token.
    pub fn resolved_username(&self) -> Option<String> {
        self.username
            .clone()
            .or_else(|| username_from_token(self.access_token.expose_secret()))
    }
}
