//! TOML configuration file and command-line overrides.
//!
//! ```toml
//! [remote]
//! enabled = true
//! base_url = "https://tynyshtyk-LipidAI.hf.space"
//! timeout_secs = 30
//!
//! [report]
//! output_dir = "."
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ldl_client::RemoteSettings;
use serde::{Deserialize, Serialize};

/// Where generated reports go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub remote: RemoteSettings,
    pub report: ReportSettings,
}

/// Values given on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub offline: bool,
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Parse configuration text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load the file at `path`, or the defaults when no path is given.
    ///
    /// A named file that is missing or malformed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parse config file {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(endpoint) = &overrides.endpoint {
            self.remote.base_url.clone_from(endpoint);
        }
        if overrides.offline {
            self.remote.enabled = false;
        }
        if let Some(dir) = &overrides.output_dir {
            self.report.output_dir.clone_from(dir);
        }
        self
    }
}
