//! Configuration management

use serde::{Deserialize, Serialize};

/// Default translation provider endpoint
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Configuration for the relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Translation provider endpoint
    pub api_endpoint: String,
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Provider request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3001,
            timeout_ms: 30000,
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_endpoint = std::env::var("TRANSLATE_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let host = std::env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("RELAY_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()?;

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        Ok(Self {
            api_endpoint,
            host,
            port,
            timeout_ms,
        })
    }

    /// Load and validate configuration
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RelayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.port, 3001);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.api_endpoint.starts_with("https://"));
    }

    #[test]
    fn test_validation_rejects_empty_endpoint() {
        let config = RelayConfig {
            api_endpoint: String::new(),
            ..RelayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = RelayConfig {
            timeout_ms: 0,
            ..RelayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_addr() {
        let config = RelayConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..RelayConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
