//! Testing utilities for code built on the host connection.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use cf_client::testing::{FakeConnection, page, resource};
//! use serde_json::json;
//!
//! let conn = FakeConnection::new()
//!     .with_username("admin")
//!     .with_space("s1", "dev")
//!     .with_json(
//!         "/v2/organizations?q=space_guid:s1",
//!         page(vec![resource("o1", json!({"name": "acme"}))]),
//!     );
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::connection::CliConnection;
use crate::endpoints::SPACES_PATH;
use crate::error::{ClientError, Result};
use crate::models::Space;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Build a single-page list envelope around `resources`.
pub fn page(resources: Vec<Value>) -> Value {
    json!({
        "total_results": resources.len(),
        "total_pages": 1,
        "prev_url": null,
        "next_url": null,
        "resources": resources,
    })
}

/// Build a resource with the given guid and entity.
pub fn resource(guid: &str, entity: Value) -> Value {
    json!({
        "metadata": { "guid": guid, "url": format!("/v2/resources/{guid}") },
        "entity": entity,
    })
}

/// In-memory [`CliConnection`] with canned responses.
///
/// Responses are keyed by the exact endpoint string. Unknown endpoints fail
/// with a 404 `ApiError`. Every `curl` endpoint and every space listing is
/// recorded in call order.
#[derive(Debug, Default)]
pub struct FakeConnection {
    responses: HashMap<String, String>,
    username: Option<String>,
    spaces: Vec<Space>,
    calls: Mutex<Vec<String>>,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_space(mut self, guid: &str, name: &str) -> Self {
        self.spaces.push(Space::new(guid, name));
        self
    }

    /// Register a JSON response; it is served pretty-printed so callers see
    /// multi-line output like the real host produces.
    pub fn with_json(self, endpoint: &str, body: Value) -> Self {
        let pretty = serde_json::to_string_pretty(&body).expect("JSON value always serializes");
        self.with_body(endpoint, &pretty)
    }

    /// Register a raw response body.
    pub fn with_body(mut self, endpoint: &str, body: &str) -> Self {
        self.responses.insert(endpoint.to_string(), body.to_string());
        self
    }

    /// Endpoints requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    fn record(&self, endpoint: &str) {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(endpoint.to_string());
    }
}

#[async_trait]
impl CliConnection for FakeConnection {
    async fn curl(&self, endpoint: &str) -> Result<Vec<String>> {
        self.record(endpoint);
        match self.responses.get(endpoint) {
            Some(body) => Ok(body.lines().map(str::to_string).collect()),
            None => Err(ClientError::ApiError {
                status: 404,
                url: endpoint.to_string(),
                message: "Unknown request".to_string(),
            }),
        }
    }

    async fn username(&self) -> Result<String> {
        self.username
            .clone()
            .ok_or_else(|| ClientError::UnknownUser("no username configured".to_string()))
    }

    async fn get_spaces(&self) -> Result<Vec<Space>> {
        self.record(SPACES_PATH);
        Ok(self.spaces.clone())
    }
}
