//! Service broker models (`/v2/service_brokers`).

use serde::Deserialize;

/// Entity of a service broker resource.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceBroker {
    pub name: String,
    #[serde(default)]
    pub broker_url: Option<String>,
    #[serde(default)]
    pub space_guid: Option<String>,
}
