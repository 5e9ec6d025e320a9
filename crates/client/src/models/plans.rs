//! Service plan models (`/v2/service_plans`).

use serde::Deserialize;

/// Entity of a service plan resource.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicePlan {
    pub name: String,
    /// Path listing the plan's instances, used verbatim as a curl endpoint.
    pub service_instances_url: String,
    #[serde(default)]
    pub free: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service_guid: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}
