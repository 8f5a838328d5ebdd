//! Settings for the remote prediction service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default service root. Predictions are posted to `<base_url>/predict`.
pub const DEFAULT_BASE_URL: &str = "https://tynyshtyk-LipidAI.hf.space";

/// Connection settings for the remote prediction service.
///
/// Every key is optional when deserialized; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Whether the remote service is contacted at all.
    pub enabled: bool,

    /// Service root URL.
    pub base_url: String,

    /// Request timeout in seconds. `None` keeps the transport default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl RemoteSettings {
    /// Settings pointing at a custom service root.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// URL of the health check endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// URL predictions are posted to.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
