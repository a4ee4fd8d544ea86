/*
[INPUT]:  Optional YAML configuration file
[OUTPUT]: Parsed bot configuration with defaults filled in
[POS]:    Configuration layer - endpoint, timeouts and logging setup
[UPDATE]: When adding new configuration options
*/

use binance_testnet_adapter::{ClientConfig, TESTNET_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration for the order bot
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BotConfig {
    /// Futures REST base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Milliseconds a signed request stays valid
    #[serde(default = "default_recv_window_ms")]
    pub recv_window_ms: u64,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Append-only log file
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Tracing filter directive, e.g. "info" or "binance_testnet_adapter=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            recv_window_ms: default_recv_window_ms(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    TESTNET_BASE_URL.to_string()
}

fn default_recv_window_ms() -> u64 {
    5000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_file() -> PathBuf {
    PathBuf::from("trading.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl BotConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        // An empty file is a null document; treat it as all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// HTTP settings for the exchange client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            recv_window: Duration::from_millis(self.recv_window_ms),
        }
    }
}
