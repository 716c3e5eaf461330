use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Filter applied when neither `RUST_LOG` nor the config supplies one.
pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn";

/// Tracing target for load diagnostics.
pub const LOG_TARGET: &str = "fragment_loader";

/// Loader configuration. Every field is optional; `{}` is a valid document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Origin that relative fragment URLs resolve against, e.g. `http://127.0.0.1:8080`.
    pub base_url: Option<String>,
    /// Overrides `DEFAULT_LOG_FILTER` when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl LoaderConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parse loader config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read loader config {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("load {}", path.display()))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
