//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

#[allow(unused_imports)]
pub use cf_client::testing::{load_fixture, page, resource};

#[allow(unused_imports)]
pub use cf_client::{CliConnection, ClientError, HttpConnection};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a connection against a mock server with a fixed token.
#[allow(dead_code)]
pub fn connection_for(server: &MockServer) -> HttpConnection {
    HttpConnection::builder()
        .api_endpoint(server.uri())
        .access_token("bearer test-token".to_string())
        .username(Some("admin".to_string()))
        .build()
        .expect("connection builds")
}
