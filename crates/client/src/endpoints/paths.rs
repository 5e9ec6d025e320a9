//! Endpoint path builders.
//!
//! Invariants:
//! - Every caller-supplied value is percent-encoded before interpolation.
//! - Returned paths start with `/v2/`.

use super::url_encoding::encode_query_value;

/// Space listing (the host's own `GetSpaces`).
pub const SPACES_PATH: &str = "/v2/spaces";

/// Brokers filtered by exact name.
pub fn service_brokers_by_name(name: &str) -> String {
    format!("/v2/service_brokers?q=name:{}", encode_query_value(name))
}

/// Plans offered by a broker.
pub fn service_plans_by_broker(broker_guid: &str) -> String {
    format!(
        "/v2/service_plans?q=service_broker_guid:{}",
        encode_query_value(broker_guid)
    )
}

/// The organization owning a space.
pub fn organizations_by_space(space_guid: &str) -> String {
    format!(
        "/v2/organizations?q=space_guid:{}",
        encode_query_value(space_guid)
    )
}
