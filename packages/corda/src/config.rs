use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the adapter host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdapterConfig {
    /// Timeout for gateway requests (milliseconds). Unset keeps the client default.
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
    /// Capture per-record failures instead of aborting the batch
    #[serde(default)]
    pub continue_on_fail: bool,
    /// User agent sent with every gateway request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("corda-rest/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: None,
            continue_on_fail: false,
            user_agent: default_user_agent(),
        }
    }
}

impl AdapterConfig {
    pub fn from_env() -> Self {
        Self {
            request_timeout_ms: std::env::var("CORDA_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok()),
            continue_on_fail: std::env::var("CORDA_CONTINUE_ON_FAIL")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            user_agent: std::env::var("CORDA_USER_AGENT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(default_user_agent),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
