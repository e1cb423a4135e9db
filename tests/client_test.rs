//! End-to-end client tests
//!
//! These tests run the client against the in-process mock agent and validate
//! complete workflows: health, browser lifecycle, groups and proxy checks.

mod common;

use bitnet_api::entity::{
    Browser, GroupAddRequest, GroupEditRequest, PageQuery, ProxyCheckRequest, ProxyType,
};
use common::{create_test_browser, setup, test_browser_payload};

/// Test 1: Health check
#[tokio::test]
async fn test_health_check() {
    let (_server, client) = setup().await;

    let response = client.health_check().await.unwrap();

    assert!(response.success);
    let data = response.data.unwrap();
    assert_eq!(data.message.as_deref(), Some("API is healthy"));
}

/// Test 2: Browser create, detail, update
#[tokio::test]
async fn test_browser_create_and_update() {
    let (_server, client) = setup().await;

    // Create
    let browser_id = create_test_browser(&client).await;

    // Detail round trip
    let detail = client.browser_detail(&browser_id).await.unwrap();
    assert!(detail.success);
    let record = detail.data.unwrap();
    assert_eq!(record.id.as_deref(), Some(browser_id.as_str()));
    let fingerprint = record.browser_finger_print.unwrap();
    assert_eq!(fingerprint.core_version.as_deref(), Some("104"));

    // Update: attach an HTTP proxy
    let update = Browser {
        id: Some(browser_id.clone()),
        proxy_type: Some(ProxyType::Http),
        host: Some("example.com".to_string()),
        port: Some("8080".to_string()),
        proxy_user_name: Some("user".to_string()),
        proxy_password: Some("pass".to_string()),
        ..test_browser_payload()
    };

    let response = client.create_or_update_browser(&update).await.unwrap();
    assert!(response.success);
    let updated = response.data.unwrap();
    assert_eq!(updated.id.as_deref(), Some(browser_id.as_str()));
    assert_eq!(updated.proxy_type, Some(ProxyType::Http));
    assert_eq!(updated.host.as_deref(), Some("example.com"));
}

/// Test 3: Browser open and close lifecycle
#[tokio::test]
async fn test_browser_open_close() {
    let (_server, client) = setup().await;
    let browser_id = create_test_browser(&client).await;

    // Open populates the runtime endpoints
    let open = client.open_browser(&browser_id).await.unwrap();
    assert!(open.success);
    let running = open.data.unwrap();
    assert!(running.is_running());
    assert!(running.ws.unwrap().starts_with("ws://"));
    assert!(running.http.is_some());

    // Close strips them again
    let close = client.close_browser(&browser_id).await.unwrap();
    assert!(close.success);

    let detail = client.browser_detail(&browser_id).await.unwrap();
    let record = detail.data.unwrap();
    assert!(!record.is_running());
    assert!(record.ws.is_none());
}

/// Test 4: Browser listing, pagination and group filtering
#[tokio::test]
async fn test_browser_list() {
    let (_server, client) = setup().await;

    for _ in 0..3 {
        create_test_browser(&client).await;
    }

    // Seeded fixture plus the three created above
    let all = client
        .browser_list(&PageQuery::page(0, 10))
        .await
        .unwrap();
    assert!(all.success);
    let page = all.data.unwrap();
    assert_eq!(page.total_elements, 4);
    assert_eq!(page.content.len(), 4);

    // Second page of two
    let second = client
        .browser_list(&PageQuery::page(1, 2))
        .await
        .unwrap();
    let page = second.data.unwrap();
    assert_eq!(page.number, 1);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content.len(), 2);

    // Only the seeded fixture belongs to the seeded group
    let scoped = client
        .browser_list(&PageQuery::default().in_group("test-group-1"))
        .await
        .unwrap();
    let page = scoped.data.unwrap();
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].id.as_deref(), Some("test-browser-1"));

    // The concise listing answers the same shape
    let concise = client
        .browser_concise_list(&PageQuery::default())
        .await
        .unwrap();
    assert!(concise.success);
    assert_eq!(concise.data.unwrap().total_elements, 4);
}

/// Test 5: Browser delete and the not-found error path
#[tokio::test]
async fn test_browser_delete() {
    let (_server, client) = setup().await;
    let browser_id = create_test_browser(&client).await;

    let delete = client.delete_browser(&browser_id).await.unwrap();
    assert!(delete.success);

    // The record is gone
    let detail = client.browser_detail(&browser_id).await.unwrap();
    assert!(!detail.success);
    assert_eq!(
        detail.msg.as_deref(),
        Some(format!("Browser not found: {}", browser_id).as_str())
    );

    // And deleting again fails the same way
    let again = client.delete_browser(&browser_id).await.unwrap();
    assert!(!again.success);
}

/// Test 6: Pid lookup for running windows
#[tokio::test]
async fn test_browser_pids() {
    let (_server, client) = setup().await;
    let browser_id = create_test_browser(&client).await;

    client.open_browser(&browser_id).await.unwrap();

    let response = client
        .browser_pids(vec![browser_id.clone(), "no-such-window".to_string()])
        .await
        .unwrap();

    assert!(response.success);
    let pids = response.data.unwrap();
    assert!(pids.contains_key(&browser_id));
    // Unknown windows are simply absent
    assert!(!pids.contains_key("no-such-window"));
}

/// Test 7: Group lifecycle
#[tokio::test]
async fn test_group_management() {
    let (_server, client) = setup().await;

    // Create
    let create = client
        .add_group(&GroupAddRequest::new("QA windows").with_sort_num(5))
        .await
        .unwrap();
    assert!(create.success);
    let group = create.data.unwrap();
    let group_id = group.id.unwrap();
    assert_eq!(group.group_name.as_deref(), Some("QA windows"));

    // Detail
    let detail = client.group_detail(&group_id).await.unwrap();
    assert!(detail.success);
    assert_eq!(detail.data.unwrap().sort_num, Some(5));

    // Rename
    let edit = client
        .edit_group(&GroupEditRequest::new(&group_id, "Staging windows"))
        .await
        .unwrap();
    assert!(edit.success);
    assert_eq!(
        edit.data.unwrap().group_name.as_deref(),
        Some("Staging windows")
    );

    // List contains the seeded fixture and the new group
    let list = client
        .group_list(&PageQuery::default())
        .await
        .unwrap();
    assert!(list.success);
    assert_eq!(list.data.unwrap().total_elements, 2);

    // Delete
    let delete = client.delete_group(&group_id).await.unwrap();
    assert!(delete.success);

    let detail = client.group_detail(&group_id).await.unwrap();
    assert!(!detail.success);
    assert_eq!(
        detail.msg.as_deref(),
        Some(format!("Group not found: {}", group_id).as_str())
    );
}

/// Test 8: Proxy check
#[tokio::test]
async fn test_proxy_check() {
    let (_server, client) = setup().await;

    let request = ProxyCheckRequest::new("example.com", 8080, ProxyType::Http)
        .with_credentials("user", "pass");

    let response = client.check_proxy(&request).await.unwrap();

    assert!(response.success);
    let info = response.data.unwrap();
    assert_eq!(info.ip.as_deref(), Some("1.2.3.4"));
    assert_eq!(info.country_name.as_deref(), Some("United States"));
    assert_eq!(info.time_zone.as_deref(), Some("America/Los_Angeles"));
    assert_eq!(info.used, Some(false));
}

/// Test 9: Unknown endpoints answer the error envelope
#[tokio::test]
async fn test_unsupported_endpoint() {
    let (server, _client) = setup().await;

    let response = reqwest::Client::new()
        .post(format!("{}/browser/explode", server.base_url()))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["msg"], "Unsupported endpoint: /browser/explode");
}
