//! Browser entity and request payloads

use serde::{Deserialize, Serialize};

use super::fingerprint::BrowserFingerPrint;
use super::proxy::ProxyType;

/// Browser window configuration and runtime state
///
/// Doubles as the `/browser/update` payload: leave `id` unset to create a
/// window, set it to update one. Runtime fields (`ws`, `http`, `pid`) are
/// filled by the agent after `/browser/open` and are never sent by the
/// client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Browser {
    /// Window id, assigned by the agent on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display sequence number, assigned by the agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// Window name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form remark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,

    /// Owning group id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Proxy configuration method (2 = custom)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_method: Option<i32>,

    /// Proxy protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<ProxyType>,

    /// Proxy host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Proxy port, a string on the wire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Proxy username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_user_name: Option<String>,

    /// Proxy password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,

    /// DevTools WebSocket endpoint of the running window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ws: Option<String>,

    /// DevTools HTTP endpoint of the running window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,

    /// Chromium core version of the running window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_version: Option<String>,

    /// OS process id of the running window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,

    /// Fingerprint configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_finger_print: Option<BrowserFingerPrint>,
}

impl Browser {
    /// Payload for creating a window with the given fingerprint
    pub fn with_fingerprint(fingerprint: BrowserFingerPrint) -> Self {
        Self {
            browser_finger_print: Some(fingerprint),
            ..Default::default()
        }
    }

    /// True once the agent reported the window as running
    pub fn is_running(&self) -> bool {
        self.ws.is_some() && self.pid.is_some()
    }
}

/// Body for endpoints addressing a single record
#[derive(Debug, Clone, Serialize)]
pub struct IdRequest {
    /// Record id
    pub id: String,
}

impl IdRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Query for the paginated listings
///
/// The `group_id` filter only applies to the browser listings; the group
/// endpoints ignore it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Page to fetch, 0-based
    pub page: i64,
    /// Records per page
    pub page_size: i64,
    /// Restrict to one group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 10,
            group_id: None,
        }
    }
}

impl PageQuery {
    /// Query one page
    pub fn page(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            group_id: None,
        }
    }

    /// Restrict the query to a group
    pub fn in_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

/// Body for `/browser/pids`
#[derive(Debug, Clone, Serialize)]
pub struct PidsRequest {
    /// Window ids to look up
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_serialization_keys() {
        let browser = Browser {
            id: Some("test-browser-id".to_string()),
            name: Some("Test Browser".to_string()),
            group_id: Some("test-group-id".to_string()),
            proxy_type: Some(ProxyType::Http),
            browser_finger_print: Some(BrowserFingerPrint::with_platform("104", "windows", "10")),
            ..Default::default()
        };

        let json = serde_json::to_value(&browser).unwrap();
        assert_eq!(json["groupId"], "test-group-id");
        assert_eq!(json["proxyType"], "http");
        assert_eq!(json["browserFingerPrint"]["coreVersion"], "104");
        // Runtime fields are absent until the agent fills them
        assert!(json.get("ws").is_none());
        assert!(json.get("pid").is_none());
    }

    #[test]
    fn test_browser_runtime_state() {
        let mut browser: Browser = serde_json::from_str(
            r#"{"id":"b1","ws":"ws://127.0.0.1:12345/abc","http":"127.0.0.1:12345","pid":12345}"#,
        )
        .unwrap();

        assert!(browser.is_running());

        browser.ws = None;
        browser.pid = None;
        assert!(!browser.is_running());
    }

    #[test]
    fn test_list_query_defaults() {
        let query = PageQuery::default();
        let json = serde_json::to_value(&query).unwrap();

        assert_eq!(json["page"], 0);
        assert_eq!(json["pageSize"], 10);
        assert!(json.get("groupId").is_none());

        let scoped = PageQuery::page(2, 25).in_group("g1");
        let json = serde_json::to_value(&scoped).unwrap();
        assert_eq!(json["page"], 2);
        assert_eq!(json["groupId"], "g1");
    }
}
