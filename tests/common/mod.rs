//! Common test utilities
//!
//! This module provides shared fixtures for the integration tests: a running
//! mock agent plus a client pointed at it.

use bitnet_api::entity::{Browser, BrowserFingerPrint};
use bitnet_api::mock::MockBitnetServer;
use bitnet_api::BitnetClient;

/// Start a mock agent and a client wired to it
pub async fn setup() -> (MockBitnetServer, BitnetClient) {
    let server = MockBitnetServer::start()
        .await
        .expect("mock agent should bind a loopback port");

    let client = BitnetClient::connect("127.0.0.1", server.port())
        .expect("client construction should succeed");

    (server, client)
}

/// Payload for a fresh test window
pub fn test_browser_payload() -> Browser {
    Browser::with_fingerprint(BrowserFingerPrint::with_platform("104", "windows", "10"))
}

/// Create a window on the mock agent and return its id
pub async fn create_test_browser(client: &BitnetClient) -> String {
    let response = client
        .create_or_update_browser(&test_browser_payload())
        .await
        .expect("create request should succeed");

    assert!(response.success);
    response
        .data
        .expect("create response should carry the record")
        .id
        .expect("created record should have an id")
}
