use std::path::Path;

use anyhow::{Context, Result};
use gravity_core::constants::{DEFAULT_BIND_ADDR, DEFAULT_STREAM_LIMIT, MAX_STREAM_LIMIT};
use gravity_core::engine::PageLimits;
use serde::{Deserialize, Serialize};

/// Server configuration that can be loaded from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Seed for draft regeneration. Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_seed: Option<u64>,

    /// Page size when `limit` is absent from a stream query
    pub default_limit: usize,

    /// Upper bound for `limit`
    pub max_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            draft_seed: None,
            default_limit: DEFAULT_STREAM_LIMIT,
            max_limit: MAX_STREAM_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to deserialize config")
    }

    pub fn page_limits(&self) -> PageLimits {
        let max = self.max_limit.max(1);
        PageLimits {
            default: self.default_limit.clamp(1, max),
            max,
        }
    }
}
