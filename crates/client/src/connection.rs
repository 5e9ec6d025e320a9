//! The host connection seam.
//!
//! The plugin never talks to the network directly. Everything it needs from
//! the host (authenticated "curl" against the control plane, the current
//! username, and the spaces the user can see) goes through [`CliConnection`].
//!
//! Invariants:
//! - `curl` returns the raw response body split into lines; callers join
//!   them before decoding.
//! - `get_spaces` returns every visible space, not just one page.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Space;

/// Operations the host runtime offers to a plugin.
#[async_trait]
pub trait CliConnection: Send + Sync {
    /// Perform an authenticated GET against a control-plane path (e.g.
    /// `/v2/service_brokers?q=name:foo`) and return the body as lines.
    async fn curl(&self, endpoint: &str) -> Result<Vec<String>>;

    /// Name of the logged-in user.
    async fn username(&self) -> Result<String>;

    /// All spaces visible to the logged-in user.
    async fn get_spaces(&self) -> Result<Vec<Space>>;
}
