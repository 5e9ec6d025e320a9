//! Common types shared across Cloud Controller v2 models.
//!
//! This module contains the paged envelope and resource wrapper. It does
//! NOT contain resource-specific entities.

use serde::Deserialize;

/// Paged list envelope returned by every v2 list endpoint.
///
/// `E` is the endpoint-specific entity type.
#[derive(Debug, Deserialize, Clone)]
pub struct CurlResponse<E> {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub prev_url: Option<String>,
    /// Path of the next page, `None` on the last page.
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<E>>,
}

impl<E> CurlResponse<E>
where
    E: for<'de> Deserialize<'de>,
{
    /// Decode an envelope from the line-oriented output of a curl call.
    ///
    /// Lines are concatenated without separators before decoding.
    pub fn from_lines(lines: &[String]) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&lines.concat())
    }
}

impl<E> CurlResponse<E> {
    /// First resource on the page, if any.
    pub fn first(&self) -> Option<&Resource<E>> {
        self.resources.first()
    }

    /// Whether more pages exist beyond this one.
    pub fn has_more_pages(&self) -> bool {
        self.next_url.is_some()
    }
}

/// A single resource: server metadata plus the endpoint-specific entity.
#[derive(Debug, Deserialize, Clone)]
pub struct Resource<E> {
    pub metadata: ResourceMetadata,
    pub entity: E,
}

/// Server-assigned resource metadata.
#[derive(Debug, Deserialize, Clone)]
pub struct ResourceMetadata {
    pub guid: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Error document returned by the control plane on non-2xx responses.
#[derive(Debug, Deserialize, Clone)]
pub struct CfErrorBody {
    #[serde(default)]
    pub code: Option<u64>,
    pub description: String,
    #[serde(default)]
    pub error_code: Option<String>,
}
