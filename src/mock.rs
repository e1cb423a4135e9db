//! Mock Bitnet agent
//!
//! This module provides an in-process HTTP server that simulates the Bitnet
//! agent API for testing without a real agent installation. It is a test
//! fixture: state lives in memory and is discarded with the server.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::Result;

/// In-memory record stores behind the mock endpoints
#[derive(Debug, Default)]
struct MockState {
    /// Browser records by id
    browsers: RwLock<HashMap<String, Value>>,
    /// Group records by id
    groups: RwLock<HashMap<String, Value>>,
}

impl MockState {
    /// State pre-populated with the standard test fixtures
    fn seeded() -> Self {
        let mut browsers = HashMap::new();
        browsers.insert(
            "test-browser-1".to_string(),
            json!({
                "id": "test-browser-1",
                "name": "Test Browser 1",
                "remark": "For testing",
                "seq": 1,
                "groupId": "test-group-1",
                "ws": "ws://127.0.0.1:12345/abc",
                "http": "127.0.0.1:12345",
                "coreVersion": "104",
                "pid": 12345,
                "browserFingerPrint": {
                    "coreVersion": "104",
                    "os": "windows",
                    "osVersion": "10"
                }
            }),
        );

        let mut groups = HashMap::new();
        groups.insert(
            "test-group-1".to_string(),
            json!({
                "id": "test-group-1",
                "groupName": "Test Group 1",
                "sortNum": 1
            }),
        );

        Self {
            browsers: RwLock::new(browsers),
            groups: RwLock::new(groups),
        }
    }
}

/// Mock HTTP server simulating the Bitnet agent
pub struct MockBitnetServer {
    addr: SocketAddr,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockBitnetServer {
    /// Start a mock agent on an OS-assigned loopback port
    pub async fn start() -> Result<Self> {
        Self::bind("127.0.0.1:0").await
    }

    /// Start a mock agent on a specific address
    pub async fn bind(addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(MockState::seeded());

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, peer_addr)) => {
                                tracing::debug!("Mock agent: connection from {}", peer_addr);
                                let state = Arc::clone(&state);
                                tokio::spawn(async move {
                                    let io = TokioIo::new(stream);
                                    let service = service_fn(move |req| {
                                        let state = Arc::clone(&state);
                                        async move {
                                            Ok::<_, hyper::Error>(Self::handle_request(state, req).await)
                                        }
                                    });

                                    if let Err(e) = http1::Builder::new()
                                        .serve_connection(io, service)
                                        .await
                                    {
                                        tracing::debug!("Mock agent: connection error: {}", e);
                                    }
                                });
                            }
                            Err(e) => {
                                tracing::error!("Mock agent: accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Mock agent: shutdown signal received");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Address the mock agent is listening on
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Port the mock agent is listening on
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Base URL of the mock agent
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Handle one HTTP request
    async fn handle_request(
        state: Arc<MockState>,
        request: Request<Incoming>,
    ) -> Response<Full<Bytes>> {
        if request.method() != Method::POST {
            return Self::json_response(Self::error_body(format!(
                "Unsupported method: {}",
                request.method()
            )));
        }

        let path = request.uri().path().to_string();

        let body = match request.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(_) => return Self::json_response(Self::error_body("Invalid JSON")),
        };

        let request_json: Value = if body.is_empty() {
            json!({})
        } else {
            match serde_json::from_slice(&body) {
                Ok(value) => value,
                Err(_) => return Self::json_response(Self::error_body("Invalid JSON")),
            }
        };

        let reply = Self::route(&state, &path, request_json).await;
        Self::json_response(reply)
    }

    /// Dispatch a request to its endpoint handler
    async fn route(state: &MockState, path: &str, body: Value) -> Value {
        match path {
            "/health" => Self::handle_health(),
            "/browser/update" => Self::handle_browser_update(state, body).await,
            "/browser/list" | "/browser/list/concise" => {
                Self::handle_browser_list(state, body).await
            }
            "/browser/detail" => Self::handle_browser_detail(state, body).await,
            "/browser/open" => Self::handle_browser_open(state, body).await,
            "/browser/close" => Self::handle_browser_close(state, body).await,
            "/browser/delete" => Self::handle_browser_delete(state, body).await,
            "/browser/pids" => Self::handle_browser_pids(state, body).await,
            "/group/add" => Self::handle_group_add(state, body).await,
            "/group/edit" => Self::handle_group_edit(state, body).await,
            "/group/list" => Self::handle_group_list(state, body).await,
            "/group/detail" => Self::handle_group_detail(state, body).await,
            "/group/delete" => Self::handle_group_delete(state, body).await,
            "/checkagent" => Self::handle_check_agent(),
            _ => Self::error_body(format!("Unsupported endpoint: {}", path)),
        }
    }

    // ========================================================================
    // Envelope helpers
    // ========================================================================

    /// Every reply is HTTP 200; failures travel in the `success` flag
    fn json_response(body: Value) -> Response<Full<Bytes>> {
        Response::builder()
            .status(200)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body.to_string())))
            .expect("static response parts are valid")
    }

    fn success_body(data: Value) -> Value {
        json!({ "success": true, "data": data })
    }

    fn error_body(msg: impl Into<String>) -> Value {
        json!({ "success": false, "msg": msg.into() })
    }

    /// Slice one page out of a record list
    fn paginate(mut records: Vec<Value>, body: &Value) -> Value {
        let page = body.get("page").and_then(Value::as_i64).unwrap_or(0).max(0) as usize;
        let page_size = body
            .get("pageSize")
            .and_then(Value::as_i64)
            .unwrap_or(10)
            .max(1) as usize;

        let total = records.len();
        let total_pages = total.div_ceil(page_size);
        let start = (page * page_size).min(total);
        let end = (start + page_size).min(total);
        let content: Vec<Value> = records.drain(start..end).collect();

        json!({
            "content": content,
            "totalElements": total,
            "totalPages": total_pages,
            "number": page,
            "size": page_size
        })
    }

    // ========================================================================
    // Endpoint handlers
    // ========================================================================

    fn handle_health() -> Value {
        Self::success_body(json!({ "message": "API is healthy" }))
    }

    async fn handle_browser_update(state: &MockState, body: Value) -> Value {
        let mut browsers = state.browsers.write().await;

        let id = body
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        // New records queue up at the end; updates keep their position
        let seq = browsers
            .get(&id)
            .and_then(|existing| existing.get("seq").cloned())
            .unwrap_or_else(|| json!(browsers.len() + 1));

        let field = |key: &str, default: Value| body.get(key).cloned().unwrap_or(default);

        let record = json!({
            "id": id.clone(),
            "name": field("name", json!("")),
            "remark": field("remark", json!("")),
            "seq": seq,
            "groupId": field("groupId", json!("")),
            "proxyMethod": field("proxyMethod", json!(2)),
            "proxyType": field("proxyType", json!("noproxy")),
            "host": field("host", json!("")),
            "port": field("port", json!("")),
            "proxyUserName": field("proxyUserName", json!("")),
            "proxyPassword": field("proxyPassword", json!("")),
            "browserFingerPrint": field("browserFingerPrint", json!({})),
        });

        browsers.insert(id, record.clone());
        Self::success_body(record)
    }

    async fn handle_browser_list(state: &MockState, body: Value) -> Value {
        let browsers = state.browsers.read().await;

        let group_id = body.get("groupId").and_then(Value::as_str);
        let records: Vec<Value> = browsers
            .values()
            .filter(|record| match group_id {
                Some(group_id) => record.get("groupId").and_then(Value::as_str) == Some(group_id),
                None => true,
            })
            .cloned()
            .collect();

        Self::success_body(Self::paginate(records, &body))
    }

    async fn handle_browser_detail(state: &MockState, body: Value) -> Value {
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        let browsers = state.browsers.read().await;

        match browsers.get(id) {
            Some(record) => Self::success_body(record.clone()),
            None => Self::error_body(format!("Browser not found: {}", id)),
        }
    }

    async fn handle_browser_open(state: &MockState, body: Value) -> Value {
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        let mut browsers = state.browsers.write().await;

        match browsers.get_mut(id) {
            Some(record) => {
                record["ws"] = json!(format!("ws://127.0.0.1:12345/{}", Uuid::new_v4()));
                record["http"] = json!("127.0.0.1:12345");
                record["pid"] = json!(10000 + chrono::Utc::now().timestamp() % 10000);
                Self::success_body(record.clone())
            }
            None => Self::error_body(format!("Browser not found: {}", id)),
        }
    }

    async fn handle_browser_close(state: &MockState, body: Value) -> Value {
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        let mut browsers = state.browsers.write().await;

        match browsers.get_mut(id) {
            Some(record) => {
                // Closing only strips runtime state; the record survives
                if let Some(fields) = record.as_object_mut() {
                    fields.remove("ws");
                    fields.remove("http");
                    fields.remove("pid");
                }
                Self::success_body(Value::Null)
            }
            None => Self::error_body(format!("Browser not found: {}", id)),
        }
    }

    async fn handle_browser_delete(state: &MockState, body: Value) -> Value {
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        let mut browsers = state.browsers.write().await;

        match browsers.remove(id) {
            Some(_) => Self::success_body(Value::Null),
            None => Self::error_body(format!("Browser not found: {}", id)),
        }
    }

    async fn handle_browser_pids(state: &MockState, body: Value) -> Value {
        let browsers = state.browsers.read().await;

        let ids: Vec<&str> = body
            .get("ids")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut pids = serde_json::Map::new();
        for id in ids {
            if let Some(pid) = browsers.get(id).and_then(|record| record.get("pid")) {
                pids.insert(id.to_string(), pid.clone());
            }
        }

        Self::success_body(Value::Object(pids))
    }

    async fn handle_group_add(state: &MockState, body: Value) -> Value {
        let mut groups = state.groups.write().await;

        let id = Uuid::new_v4().to_string();
        let record = json!({
            "id": id.clone(),
            "groupName": body.get("groupName").cloned().unwrap_or(json!("")),
            "sortNum": body.get("sortNum").cloned().unwrap_or(json!(0)),
        });

        groups.insert(id, record.clone());
        Self::success_body(record)
    }

    async fn handle_group_edit(state: &MockState, body: Value) -> Value {
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        let mut groups = state.groups.write().await;

        match groups.get_mut(id) {
            Some(record) => {
                if let Some(name) = body.get("groupName") {
                    record["groupName"] = name.clone();
                }
                if let Some(sort_num) = body.get("sortNum") {
                    record["sortNum"] = sort_num.clone();
                }
                Self::success_body(record.clone())
            }
            None => Self::error_body(format!("Group not found: {}", id)),
        }
    }

    async fn handle_group_list(state: &MockState, body: Value) -> Value {
        let groups = state.groups.read().await;
        let records: Vec<Value> = groups.values().cloned().collect();

        Self::success_body(Self::paginate(records, &body))
    }

    async fn handle_group_detail(state: &MockState, body: Value) -> Value {
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        let groups = state.groups.read().await;

        match groups.get(id) {
            Some(record) => Self::success_body(record.clone()),
            None => Self::error_body(format!("Group not found: {}", id)),
        }
    }

    async fn handle_group_delete(state: &MockState, body: Value) -> Value {
        let id = body.get("id").and_then(Value::as_str).unwrap_or_default();
        let mut groups = state.groups.write().await;

        match groups.remove(id) {
            Some(_) => Self::success_body(Value::Null),
            None => Self::error_body(format!("Group not found: {}", id)),
        }
    }

    fn handle_check_agent() -> Value {
        // The real agent wraps the check result in a second envelope
        Self::success_body(json!({
            "success": true,
            "data": {
                "ip": "1.2.3.4",
                "countryName": "United States",
                "stateProv": "California",
                "countryCode": "US",
                "region": "CA",
                "city": "San Francisco",
                "languages": "en-US",
                "timeZone": "America/Los_Angeles",
                "offset": "-7",
                "longitude": "-122.4194",
                "latitude": "37.7749",
                "zip": "94102",
                "status": 1,
                "used": false,
                "usedTime": null
            }
        }))
    }
}

impl Drop for MockBitnetServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
