//! Shared test utilities for cf-describe integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading and
//!   host config leakage.
//! - Mount a complete control plane on a wiremock server.
//!
//! Invariants / Assumptions:
//! - `CF_HOME` points at a directory that does not exist, so no host
//!   config file is read unless a test provides one.
//! - The mocked control plane serves the `cf-client` fixtures.

use assert_cmd::Command;
use cf_client::testing::{load_fixture, page};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const BROKER_GUID: &str = "8d4a5b2e-6a53-4c1b-9c4e-3f1d2a7b0c11";
#[allow(dead_code)]
pub const GOLD_PLAN_GUID: &str = "a1f3c0de-0000-4000-8000-000000000001";
#[allow(dead_code)]
pub const SILVER_PLAN_GUID: &str = "a1f3c0de-0000-4000-8000-000000000002";

/// Returns a hermetic `cf-describe` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Connection variables are cleared to ensure no leakage from the host.
pub fn describe_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cf-describe");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("CF_HOME", "/nonexistent/cf-describe-test-home");

    cmd.env_remove("CF_DESCRIBE_API")
        .env_remove("CF_DESCRIBE_ACCESS_TOKEN")
        .env_remove("CF_DESCRIBE_USERNAME")
        .env_remove("CF_DESCRIBE_SKIP_VERIFY")
        .env_remove("CF_DESCRIBE_TIMEOUT")
        .env_remove("CF_DESCRIBE_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command connected to `server` as user `admin`.
#[allow(dead_code)]
pub fn describe_cmd_for(server: &MockServer) -> Command {
    let mut cmd = describe_cmd();
    cmd.env("CF_DESCRIBE_API", server.uri())
        .env("CF_DESCRIBE_ACCESS_TOKEN", "bearer test-token")
        .env("CF_DESCRIBE_USERNAME", "admin");
    cmd
}

/// Mount the broker lookup for `p-mysql`.
#[allow(dead_code)]
pub async fn mount_broker(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/service_brokers"))
        .and(query_param("q", "name:p-mysql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("brokers/list_by_name.json")),
        )
        .mount(server)
        .await;
}

/// Mount the broker's plan listing (gold and silver).
#[allow(dead_code)]
pub async fn mount_plans(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/service_plans"))
        .and(query_param("q", format!("service_broker_guid:{BROKER_GUID}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("plans/list_by_broker.json")),
        )
        .mount(server)
        .await;
}

/// Mount the two-page space listing and an `acme` owner for every space.
#[allow(dead_code)]
pub async fn mount_spaces_and_orgs(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("spaces/page1.json")))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("spaces/page2.json")))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("organizations/by_space.json")),
        )
        .mount(server)
        .await;
}

/// Mount instance listings: gold holds db1 and db2, silver is empty.
#[allow(dead_code)]
pub async fn mount_instances(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/v2/service_plans/{GOLD_PLAN_GUID}/service_instances"
        )))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("instances/list_for_plan.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/v2/service_plans/{SILVER_PLAN_GUID}/service_instances"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![])))
        .mount(server)
        .await;
}

/// Mount every endpoint a full broker description touches.
#[allow(dead_code)]
pub async fn mount_control_plane(server: &MockServer) {
    mount_broker(server).await;
    mount_plans(server).await;
    mount_spaces_and_orgs(server).await;
    mount_instances(server).await;
}
