//! Common test utilities for Eagle API tests.

use eagle::EagleClient;
use serde_json::Value;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> EagleClient {
    EagleClient::builder().url(server.uri()).build()
}

/// The reply Eagle sends for a successful write.
#[allow(dead_code)] // Not all test files use this
pub fn success_body() -> Value {
    serde_json::json!({"status": "success"})
}

/// Create a successful JSON response.
pub fn mock_json(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Mount a mock for a GET endpoint without query matching.
#[allow(dead_code)] // Not all test files use this
pub async fn mock_get(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a mock for a POST endpoint that only matches the exact body.
#[allow(dead_code)] // Not all test files use this
pub async fn mock_post(
    server: &MockServer,
    endpoint: &str,
    body: Value,
    response: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_json(body))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
