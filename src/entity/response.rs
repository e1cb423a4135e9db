//! Response envelope types
//!
//! Every agent endpoint answers with the same envelope: a `success` flag, an
//! optional `msg` carrying the failure reason, and an optional `data` payload.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Error, Result};

/// Generic response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Failure reason when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Payload when `success` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning `success: false` into [`Error::Api`].
    ///
    /// A successful response without a payload is also an error here; use the
    /// raw `success` flag for endpoints that return no data.
    pub fn into_result(self) -> Result<T> {
        if !self.success {
            return Err(Error::api(
                self.msg.unwrap_or_else(|| "Unknown API error".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| Error::api("Response contained no data"))
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedData<T> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total record count across all pages
    #[serde(default)]
    pub total_elements: i64,
    /// Total page count
    #[serde(default)]
    pub total_pages: i64,
    /// Current page, 0-based
    #[serde(default)]
    pub number: i64,
    /// Page size
    #[serde(default)]
    pub size: i64,
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    /// Human-readable status line
    #[serde(default)]
    pub message: Option<String>,
}

/// Health check response
pub type HealthResponse = ApiResponse<HealthData>;

/// Response carrying a single browser
pub type BrowserResponse = ApiResponse<super::Browser>;

/// Response carrying a browser page
pub type BrowserListResponse = ApiResponse<PagedData<super::Browser>>;

/// Response carrying a single group
pub type GroupResponse = ApiResponse<super::Group>;

/// Response carrying a group page
pub type GroupListResponse = ApiResponse<PagedData<super::Group>>;

/// Response whose payload is ignored (close/delete acknowledgements)
pub type GenericResponse = ApiResponse<serde_json::Value>;

/// Response mapping browser ids to OS process ids
pub type PidsResponse = ApiResponse<HashMap<String, i64>>;

/// Response carrying a proxy check result
pub type ProxyCheckResponse = ApiResponse<super::ProxyCheckInfo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_deserialization() {
        let response: HealthResponse =
            serde_json::from_str(r#"{"success":true,"data":{"message":"API is healthy"}}"#)
                .unwrap();

        assert!(response.success);
        assert_eq!(response.data.unwrap().message.as_deref(), Some("API is healthy"));
    }

    #[test]
    fn test_error_envelope_into_result() {
        let response: GenericResponse =
            serde_json::from_str(r#"{"success":false,"msg":"Browser not found: x"}"#).unwrap();

        let err = response.into_result().unwrap_err();
        assert!(matches!(err, Error::Api(msg) if msg == "Browser not found: x"));
    }

    #[test]
    fn test_paged_data_field_mapping() {
        let page: PagedData<serde_json::Value> = serde_json::from_str(
            r#"{"content":[],"totalElements":100,"totalPages":10,"number":0,"size":10}"#,
        )
        .unwrap();

        assert_eq!(page.total_elements, 100);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.size, 10);
    }
}
