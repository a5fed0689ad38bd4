//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! defaults and environment variables (optionally loaded from a `.env` file).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default root of the Tiingo REST API.
pub const DEFAULT_TIINGO_BASE_URL: &str = "https://api.tiingo.com/tiingo";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Tiingo API access.
    pub tiingo: TiingoConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Tiingo API access configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct TiingoConfig {
    /// API token sent as `Authorization: Token <token>`.
    /// Get one at: https://www.tiingo.com/account/api/token
    pub api_token: Option<String>,

    /// Root URL that resource paths are appended to.
    pub base_url: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for TiingoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TiingoConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for TiingoConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: DEFAULT_TIINGO_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-tiingo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            tiingo: TiingoConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); Tiingo access uses
    /// `TIINGO_API_TOKEN` and `TIINGO_BASE_URL`. Empty values count as unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = non_empty_var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = non_empty_var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(timestamps) = non_empty_var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config.transport = TransportConfig::from_env();

        config.tiingo.api_token = non_empty_var("TIINGO_API_TOKEN");

        if let Some(base_url) = non_empty_var("TIINGO_BASE_URL") {
            config.tiingo.base_url = base_url;
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_tiingo_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TIINGO_API_TOKEN", "test_key_12345");
            std::env::set_var("TIINGO_BASE_URL", "http://localhost:9999/tiingo");
        }
        let config = Config::from_env();
        assert_eq!(config.tiingo.api_token.as_deref(), Some("test_key_12345"));
        assert_eq!(config.tiingo.base_url, "http://localhost:9999/tiingo");
        unsafe {
            std::env::remove_var("TIINGO_API_TOKEN");
            std::env::remove_var("TIINGO_BASE_URL");
        }
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        for blank in ["", "   "] {
            unsafe {
                std::env::set_var("TIINGO_API_TOKEN", blank);
                std::env::remove_var("TIINGO_BASE_URL");
            }
            let config = Config::from_env();
            assert!(config.tiingo.api_token.is_none());
            assert_eq!(config.tiingo.base_url, DEFAULT_TIINGO_BASE_URL);
        }
        unsafe {
            std::env::remove_var("TIINGO_API_TOKEN");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "tiingo-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "tiingo-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let config = Config {
            tiingo: TiingoConfig {
                api_token: Some("super_secret_key".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "mcp-tiingo");
        assert_eq!(config.tiingo.base_url, DEFAULT_TIINGO_BASE_URL);
        assert!(config.tiingo.api_token.is_none());
        assert!(config.transport.is_stdio());
    }
}
