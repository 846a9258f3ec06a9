/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for okx-rest-adapter tests

use okx_rest_adapter::{ClientConfig, Credentials, OkxClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_SECRET: &str = "22582BD0CFF14C41EDBF1AB98506286D";
pub const TEST_PASSPHRASE: &str = "test-passphrase";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with fixed test credentials
pub fn mock_client(server: &MockServer) -> OkxClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    OkxClient::with_config(
        Credentials::new(TEST_API_KEY, TEST_SECRET, TEST_PASSPHRASE),
        config,
    )
    .expect("client init")
}

/// Successful OKX envelope around `data`
pub fn ok_envelope(data: Value) -> Value {
    json!({ "code": "0", "msg": "", "data": data })
}
