//! Integration tests for exit codes and failure lines.
//!
//! Warnings exit 0; every reported failure prints one `FAILED:` line to
//! stdout and exits 1.

mod common;

use common::*;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;
    mount_control_plane(&server).await;

    describe_cmd_for(&server)
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(0);
}

#[tokio::test]
async fn test_unknown_flag_returns_exit_code_1_without_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    describe_cmd_for(&server)
        .args(["describe", "-b", "p-mysql", "-x"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("FAILED: cannot parse flags. Error: "));
}

#[test]
fn test_missing_flag_value_returns_exit_code_1() {
    describe_cmd()
        .args(["describe", "-b"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("FAILED: cannot parse flags. Error: "));
}

#[tokio::test]
async fn test_malformed_json_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/service_brokers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    describe_cmd_for(&server)
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not unmarshal response. Error: ",
        ));
}

#[tokio::test]
async fn test_schema_violation_returns_exit_code_1() {
    let server = MockServer::start().await;
    mount_broker(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2/service_plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 1,
            "resources": [{ "metadata": { "guid": "p1" }, "entity": { "name": 42 } }]
        })))
        .mount(&server)
        .await;

    describe_cmd_for(&server)
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not unmarshal response. Error: ",
        ));
}

#[tokio::test]
async fn test_auth_failure_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/service_brokers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(
            cf_client::testing::load_fixture("errors/invalid_auth.json"),
        ))
        .mount(&server)
        .await;

    describe_cmd_for(&server)
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not query the API. Error: API error (401)",
        ))
        .stdout(predicate::str::contains("Invalid Auth Token"));
}

#[test]
fn test_connection_refused_returns_exit_code_1() {
    describe_cmd()
        .env("CF_DESCRIBE_API", "http://127.0.0.1:1")
        .env("CF_DESCRIBE_ACCESS_TOKEN", "test-token")
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not query the API. Error: HTTP error",
        ));
}

#[test]
fn test_missing_api_endpoint_returns_exit_code_1() {
    describe_cmd()
        .env("CF_DESCRIBE_ACCESS_TOKEN", "test-token")
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not load configuration. Error: API endpoint is required",
        ));
}

#[test]
fn test_missing_token_returns_exit_code_1() {
    describe_cmd()
        .env("CF_DESCRIBE_API", "https://api.example.com")
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Access token is required"));
}

#[test]
fn test_invalid_timeout_returns_exit_code_1() {
    describe_cmd()
        .env("CF_DESCRIBE_API", "https://api.example.com")
        .env("CF_DESCRIBE_ACCESS_TOKEN", "test-token")
        .env("CF_DESCRIBE_TIMEOUT", "0")
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not load configuration. Error: invalid timeout",
        ));
}

#[test]
fn test_malformed_host_config_returns_exit_code_1() {
    let home = tempfile::tempdir().unwrap();
    let cf_dir = home.path().join(".cf");
    std::fs::create_dir_all(&cf_dir).unwrap();
    std::fs::write(cf_dir.join("config.json"), "{ not json").unwrap();

    describe_cmd()
        .env("CF_HOME", home.path())
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not load configuration. Error: Failed to parse host config file",
        ));
}

#[tokio::test]
async fn test_missing_org_returns_exit_code_1() {
    let server = MockServer::start().await;
    mount_broker(&server).await;
    mount_plans(&server).await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(cf_client::testing::load_fixture("spaces/page2.json")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 0,
            "resources": []
        })))
        .mount(&server)
        .await;

    describe_cmd_for(&server)
        .args(["describe", "-b", "p-mysql"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "FAILED: could not resolve organization.",
        ));
}
