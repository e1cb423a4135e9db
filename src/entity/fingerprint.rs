//! Browser fingerprint entity
//!
//! The agent accepts a flat map of fingerprint knobs; every field is optional
//! and omitted from the request when unset, leaving the agent's own defaults
//! in charge.

use serde::{Deserialize, Serialize};

/// Browser fingerprint configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserFingerPrint {
    /// Chromium core version (e.g. "104")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_version: Option<String>,

    /// Operating system family (e.g. "windows", "macos", "linux")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    /// Operating system version (e.g. "10")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    /// Browser major version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Full user agent override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Accept-Language list (e.g. "en-US,en")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,

    /// IANA timezone (e.g. "America/Los_Angeles")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Screen resolution (e.g. "1920x1080")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Device pixel ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_pixel_ratio: Option<f64>,

    /// navigator.hardwareConcurrency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,

    /// navigator.deviceMemory in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_memory: Option<u32>,

    /// Canvas noise mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<String>,

    /// WebGL image noise mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_gl: Option<String>,

    /// WebGL vendor string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_gl_vendor: Option<String>,

    /// WebGL renderer string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_gl_render: Option<String>,

    /// AudioContext noise mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_context: Option<String>,

    /// navigator.doNotTrack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub do_not_track: Option<bool>,

    /// Reject local port scanning from pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_scan_protect: Option<bool>,
}

impl BrowserFingerPrint {
    /// Minimal fingerprint pinning core version and platform
    pub fn with_platform(
        core_version: impl Into<String>,
        os: impl Into<String>,
        os_version: impl Into<String>,
    ) -> Self {
        Self {
            core_version: Some(core_version.into()),
            os: Some(os.into()),
            os_version: Some(os_version.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_camel_case_keys() {
        let fingerprint = BrowserFingerPrint::with_platform("104", "windows", "10");

        let json = serde_json::to_value(&fingerprint).unwrap();
        assert_eq!(json["coreVersion"], "104");
        assert_eq!(json["os"], "windows");
        assert_eq!(json["osVersion"], "10");
        // Unset knobs stay off the wire
        assert!(json.get("userAgent").is_none());
    }

    #[test]
    fn test_fingerprint_from_wire() {
        let fingerprint: BrowserFingerPrint = serde_json::from_str(
            r#"{"coreVersion":"110","os":"linux","osVersion":"ubuntu","hardwareConcurrency":8}"#,
        )
        .unwrap();

        assert_eq!(fingerprint.core_version.as_deref(), Some("110"));
        assert_eq!(fingerprint.os.as_deref(), Some("linux"));
        assert_eq!(fingerprint.hardware_concurrency, Some(8));
        assert!(fingerprint.user_agent.is_none());
    }
}
