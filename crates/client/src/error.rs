//! Error types for the control-plane client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the control plane.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the control plane.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL or endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Required connection setting missing.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The current user could not be determined from the session.
    #[error("Unable to determine the current user: {0}")]
    UnknownUser(String),
}

impl ClientError {
    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }
}
