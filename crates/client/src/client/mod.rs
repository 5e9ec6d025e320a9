//! HTTP implementation of the host connection.
//!
//! [`HttpConnection`] plays the host CLI's part: it sends authenticated GET
//! requests to the control plane and answers the space and username
//! queries a plugin is allowed to make.
//!
//! # What this module does NOT handle:
//! - Plan/instance pagination; `curl` returns exactly the page it was asked for.
//! - Token refresh; an expired token surfaces as a 401 `ApiError`.
//!
//! # Invariants
//! - `api_endpoint` has no trailing slash.
//! - `get_spaces` follows `next_url` until the last page, and stops if a
//!   page points back at one already fetched.
//! - The access token is only ever sent to the API root's scheme and authority.

pub mod builder;

use std::collections::HashSet;

use async_trait::async_trait;
use cf_config::username_from_token;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::connection::CliConnection;
use crate::endpoints::{self, SPACES_PATH};
use crate::error::{ClientError, Result};
use crate::models::{CurlResponse, Space, SpaceEntity};

use builder::HttpConnectionBuilder;

/// Connection to a control-plane API over HTTP.
///
/// # Creating a Connection
///
/// ```rust,ignore
/// use cf_client::HttpConnection;
///
/// let connection = HttpConnection::builder()
///     .api_endpoint("https://api.example.com".to_string())
///     .access_token("bearer eyJhbGciOi...".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct HttpConnection {
    pub(crate) http: reqwest::Client,
    pub(crate) api_endpoint: String,
    pub(crate) access_token: SecretString,
    pub(crate) username: Option<String>,
}

impl HttpConnection {
    /// Create a new connection builder.
    pub fn builder() -> HttpConnectionBuilder {
        HttpConnectionBuilder::new()
    }

    /// The API root every relative endpoint is resolved against.
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Resolve an endpoint to an absolute URL.
    ///
    /// Absolute `http(s)://` URLs are accepted only when their scheme and
    /// authority match the API root; anything else is a path under the root.
    fn resolve(&self, endpoint: &str) -> Result<String> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(ClientError::InvalidUrl("endpoint is empty".to_string()));
        }
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return self.check_same_origin(endpoint);
        }
        if endpoint.starts_with('/') {
            Ok(format!("{}{}", self.api_endpoint, endpoint))
        } else {
            Ok(format!("{}/{}", self.api_endpoint, endpoint))
        }
    }

    fn check_same_origin(&self, endpoint: &str) -> Result<String> {
        let target = Url::parse(endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{endpoint}: {e}")))?;
        let root = Url::parse(&self.api_endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.api_endpoint)))?;

        if target.origin() != root.origin() {
            return Err(ClientError::InvalidUrl(format!(
                "{} is not on the API host {}",
                target.origin().ascii_serialization(),
                root.origin().ascii_serialization()
            )));
        }
        Ok(endpoint.to_string())
    }

    async fn get(&self, endpoint: &str) -> Result<String> {
        let url = self.resolve(endpoint)?;
        endpoints::get_text(&self.http, &url, self.access_token.expose_secret()).await
    }
}

#[async_trait]
impl CliConnection for HttpConnection {
    async fn curl(&self, endpoint: &str) -> Result<Vec<String>> {
        let body = self.get(endpoint).await?;
        Ok(body.lines().map(str::to_string).collect())
    }

    async fn username(&self) -> Result<String> {
        self.username
            .clone()
            .or_else(|| username_from_token(self.access_token.expose_secret()))
            .ok_or_else(|| {
                ClientError::UnknownUser(
                    "access token carries no user_name claim; set CF_DESCRIBE_USERNAME"
                        .to_string(),
                )
            })
    }

    async fn get_spaces(&self) -> Result<Vec<Space>> {
        let mut spaces = Vec::new();
        let mut next = Some(SPACES_PATH.to_string());
        let mut seen = HashSet::new();
        let mut page = 0usize;

        while let Some(endpoint) = next.take() {
            if !seen.insert(endpoint.clone()) {
                warn!(next_url = %endpoint, "Space listing repeats a page, stopping");
                break;
            }
            page += 1;
            let body = self.get(&endpoint).await?;
            let response: CurlResponse<SpaceEntity> = serde_json::from_str(&body)
                .map_err(|e| ClientError::InvalidResponse(format!("{endpoint}: {e}")))?;

            debug!(
                page,
                count = response.resources.len(),
                total = response.total_results,
                "Fetched spaces page"
            );

            next = response.next_url.clone();
            spaces.extend(response.resources.into_iter().map(Space::from));
        }

        Ok(spaces)
    }
}
