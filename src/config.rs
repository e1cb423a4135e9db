//! Configuration management for the Bitnet API client

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Agent host address
    pub host: String,

    /// Agent port
    pub port: u16,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Connect timeout in seconds
    pub connect_timeout: u64,

    /// Log level
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 54345,
            timeout: 30,
            connect_timeout: 5,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = ClientConfig::default();

        if let Ok(host) = env::var("BITNET_HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("BITNET_PORT") {
            config.port = port
                .parse()
                .map_err(|_| Error::configuration("Invalid BITNET_PORT"))?;
        }

        if let Ok(timeout) = env::var("BITNET_TIMEOUT") {
            config.timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid BITNET_TIMEOUT"))?;
        }

        if let Ok(connect_timeout) = env::var("BITNET_CONNECT_TIMEOUT") {
            config.connect_timeout = connect_timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid BITNET_CONNECT_TIMEOUT"))?;
        }

        if let Ok(log_level) = env::var("BITNET_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Base URL of the agent API
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
