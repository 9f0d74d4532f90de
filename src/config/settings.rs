use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::utils::constants::{DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_LOOPBACK_HOST, DEFAULT_PTOKEN_PATH};

/// ================================
/// Handler-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Pool secret file read by the ptoken handler.
    #[serde(default = "default_ptoken_path")]
    pub ptoken_path: PathBuf,
    /// Hosts that count as loopback when gating ptoken / xapitoken.
    /// invariant: not empty
    #[serde(default = "default_loopback_hosts")]
    pub loopback_hosts: Vec<String>,
    /// Timeout for http(s) token locators.
    /// invariant: > 0
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
    /// Locator used when a repository enables xapitoken with a bare `true`.
    #[serde(default)]
    pub xapitoken_locator: Option<String>,
    pub logging: Option<LoggingConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ptoken_path: default_ptoken_path(),
            loopback_hosts: default_loopback_hosts(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            xapitoken_locator: None,
            logging: None,
        }
    }
}

impl Settings {
    pub fn with_ptoken_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ptoken_path = path.into();
        self
    }

    pub fn with_loopback_hosts(mut self, hosts: Vec<String>) -> Self {
        self.loopback_hosts = hosts;
        self
    }

    pub fn with_xapitoken_locator(mut self, locator: impl Into<String>) -> Self {
        self.xapitoken_locator = Some(locator.into());
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_ptoken_path() -> PathBuf {
    PathBuf::from(DEFAULT_PTOKEN_PATH)
}

fn default_loopback_hosts() -> Vec<String> {
    vec![DEFAULT_LOOPBACK_HOST.to_owned()]
}

fn default_fetch_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}
