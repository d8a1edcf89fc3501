//! Host configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabset_tabs::TabsConfig;

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Tab group props
    pub tabs: TabsConfig,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tabs: TabsConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}
