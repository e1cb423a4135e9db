//! Proxy types and proxy check entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proxy protocol accepted by the agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    /// Direct connection
    #[default]
    NoProxy,
    /// HTTP proxy
    Http,
    /// HTTPS proxy
    Https,
    /// SOCKS5 proxy
    Socks5,
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProxyType::NoProxy => "noproxy",
            ProxyType::Http => "http",
            ProxyType::Https => "https",
            ProxyType::Socks5 => "socks5",
        };
        f.write_str(s)
    }
}

/// Body for `/checkagent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyCheckRequest {
    /// Proxy host
    pub host: String,
    /// Proxy port
    pub port: u16,
    /// Proxy protocol
    pub proxy_type: ProxyType,
    /// Proxy username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_user_name: Option<String>,
    /// Proxy password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,
}

impl ProxyCheckRequest {
    pub fn new(host: impl Into<String>, port: u16, proxy_type: ProxyType) -> Self {
        Self {
            host: host.into(),
            port,
            proxy_type,
            proxy_user_name: None,
            proxy_password: None,
        }
    }

    /// Attach proxy credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.proxy_user_name = Some(username.into());
        self.proxy_password = Some(password.into());
        self
    }
}

/// Exit-node details reported by the proxy check
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyCheckInfo {
    /// Exit IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,

    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_prov: Option<String>,

    /// ISO country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Region code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Locale list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,

    /// IANA timezone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// UTC offset in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,

    /// Longitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,

    /// Latitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,

    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Agent-side status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,

    /// Whether this exit was already used by another window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<bool>,

    /// When the exit was last used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_time: Option<String>,
}

/// Inner envelope of `/checkagent`
///
/// The agent wraps the check result in a second `{success, data}` layer; the
/// client flattens it before handing the response to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyCheckEnvelope {
    /// Check outcome
    pub success: bool,
    /// Exit-node details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ProxyCheckInfo>,
}
