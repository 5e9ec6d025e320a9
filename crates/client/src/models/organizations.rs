//! Organization models (`/v2/organizations`).

use serde::Deserialize;

/// Entity of an organization resource.
#[derive(Debug, Deserialize, Clone)]
pub struct Organization {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}
