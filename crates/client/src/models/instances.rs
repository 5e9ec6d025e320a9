//! Service instance models (`/v2/service_plans/:guid/service_instances`).

use serde::Deserialize;

/// Entity of a service instance resource.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceInstance {
    pub name: String,
    pub space_guid: String,
    #[serde(default)]
    pub service_plan_guid: Option<String>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
}
