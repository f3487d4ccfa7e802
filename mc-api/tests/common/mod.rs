//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use mc_api::ApiClient;
use mc_core::config::ClientConfig;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

/// Bearer credential every test client is built with.
pub const API_KEY: &str = "test-api-key";

/// Authorization header value the mock server expects.
pub fn bearer() -> String {
    format!("Bearer {API_KEY}")
}

/// Client configuration pointing at the mock server's `/api` root.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::with_api_key(API_KEY).base_url(format!("{}/api", server.uri()))
}

/// Client talking to the mock server.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::from_config(&config_for(server)).expect("failed to build test client")
}

/// Start a mock server and a client bound to it.
pub async fn start() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = client_for(&server);
    (server, client)
}

/// Write an upload fixture into `dir` and return its path.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// A listing page shaped like the server's pagination envelope.
pub fn page_json(page: u32, last_page: u32, data: &[&str]) -> Value {
    let base = "https://mediacloud.ng/api/media";
    let page_url = |n: u32| json!(format!("{base}?page={n}"));

    let count = data.len() as u32;
    let (from, to) = if data.is_empty() {
        (Value::Null, Value::Null)
    } else {
        let first = (page - 1) * 15 + 1;
        (json!(first), json!(first + count - 1))
    };
    let next = if page < last_page { page_url(page + 1) } else { Value::Null };
    let prev = if page > 1 { page_url(page - 1) } else { Value::Null };

    json!({
        "current_page": page,
        "data": data,
        "first_page_url": page_url(1),
        "from": from,
        "last_page": last_page,
        "last_page_url": page_url(last_page),
        "links": [
            { "url": null, "label": "&laquo; Previous", "active": false },
            { "url": page_url(page), "label": page.to_string(), "active": true }
        ],
        "next_page_url": next,
        "path": base,
        "per_page": 15,
        "prev_page_url": prev,
        "to": to,
        "total": (last_page - 1) * 15 + count
    })
}
