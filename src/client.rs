//! Bitnet API client
//!
//! This module provides the async HTTP client for the Bitnet agent. Every
//! endpoint is a JSON POST; the agent signals failures through the `success`
//! flag of the response envelope, not through HTTP status codes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ClientConfig;
use crate::entity::proxy::ProxyCheckEnvelope;
use crate::entity::{
    ApiResponse, Browser, BrowserListResponse, BrowserResponse, GenericResponse, GroupAddRequest,
    GroupEditRequest, GroupListResponse, GroupResponse, HealthResponse, IdRequest, PageQuery,
    PidsRequest, PidsResponse, ProxyCheckRequest, ProxyCheckResponse,
};
use crate::{Error, Result};

/// Async client for the Bitnet agent API
#[derive(Debug, Clone)]
pub struct BitnetClient {
    /// Underlying HTTP client
    http: reqwest::Client,
    /// Agent base URL (e.g. "http://127.0.0.1:54345")
    base_url: String,
}

impl BitnetClient {
    /// Create a client from a configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| Error::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }

    /// Create a client for an agent on the given host and port
    pub fn connect(host: impl Into<String>, port: u16) -> Result<Self> {
        let config = ClientConfig {
            host: host.into(),
            port,
            ..ClientConfig::default()
        };
        Self::new(&config)
    }

    /// Agent base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and decode the JSON reply
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api(format!("{} answered HTTP {}", path, status)));
        }

        Ok(response.json::<T>().await?)
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Check that the agent is reachable and healthy
    pub async fn health_check(&self) -> Result<HealthResponse> {
        self.post("/health", &serde_json::json!({})).await
    }

    // ========================================================================
    // Browser management
    // ========================================================================

    /// Create a browser window, or update one when `browser.id` is set
    pub async fn create_or_update_browser(&self, browser: &Browser) -> Result<BrowserResponse> {
        self.post("/browser/update", browser).await
    }

    /// List browser windows, one page at a time
    pub async fn browser_list(&self, query: &PageQuery) -> Result<BrowserListResponse> {
        self.post("/browser/list", query).await
    }

    /// List browser windows without their fingerprint payloads
    pub async fn browser_concise_list(
        &self,
        query: &PageQuery,
    ) -> Result<BrowserListResponse> {
        self.post("/browser/list/concise", query).await
    }

    /// Fetch one browser window
    pub async fn browser_detail(&self, id: impl Into<String>) -> Result<BrowserResponse> {
        self.post("/browser/detail", &IdRequest::new(id)).await
    }

    /// Launch a browser window; the reply carries its `ws`, `http` and `pid`
    pub async fn open_browser(&self, id: impl Into<String>) -> Result<BrowserResponse> {
        self.post("/browser/open", &IdRequest::new(id)).await
    }

    /// Close a running browser window
    pub async fn close_browser(&self, id: impl Into<String>) -> Result<GenericResponse> {
        self.post("/browser/close", &IdRequest::new(id)).await
    }

    /// Delete a browser window
    pub async fn delete_browser(&self, id: impl Into<String>) -> Result<GenericResponse> {
        self.post("/browser/delete", &IdRequest::new(id)).await
    }

    /// Map running window ids to their OS process ids
    pub async fn browser_pids(&self, ids: Vec<String>) -> Result<PidsResponse> {
        self.post("/browser/pids", &PidsRequest { ids }).await
    }

    // ========================================================================
    // Group management
    // ========================================================================

    /// Create a group
    pub async fn add_group(&self, request: &GroupAddRequest) -> Result<GroupResponse> {
        self.post("/group/add", request).await
    }

    /// Rename or reorder a group
    pub async fn edit_group(&self, request: &GroupEditRequest) -> Result<GroupResponse> {
        self.post("/group/edit", request).await
    }

    /// List groups, one page at a time
    pub async fn group_list(&self, query: &PageQuery) -> Result<GroupListResponse> {
        self.post("/group/list", query).await
    }

    /// Fetch one group
    pub async fn group_detail(&self, id: impl Into<String>) -> Result<GroupResponse> {
        self.post("/group/detail", &IdRequest::new(id)).await
    }

    /// Delete a group
    pub async fn delete_group(&self, id: impl Into<String>) -> Result<GenericResponse> {
        self.post("/group/delete", &IdRequest::new(id)).await
    }

    // ========================================================================
    // Proxy check
    // ========================================================================

    /// Probe a proxy and report its exit-node details
    ///
    /// The agent double-wraps this endpoint's payload; the inner envelope is
    /// flattened here so callers see the check result directly.
    pub async fn check_proxy(&self, request: &ProxyCheckRequest) -> Result<ProxyCheckResponse> {
        let outer: ApiResponse<ProxyCheckEnvelope> = self.post("/checkagent", request).await?;

        Ok(ProxyCheckResponse {
            success: outer.success && outer.data.as_ref().is_none_or(|inner| inner.success),
            msg: outer.msg,
            data: outer.data.and_then(|inner| inner.data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_base_url() {
        let client = BitnetClient::connect("127.0.0.1", 55055).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:55055");
    }

    #[test]
    fn test_client_from_default_config() {
        let client = BitnetClient::new(&ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:54345");
    }
}
