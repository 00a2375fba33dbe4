//! Configuration file handling.
//!
//! The config file is optional JSON. It lives in the platform config
//! directory unless `--config` points elsewhere.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use flora_scheme::{parse_group_version, GroupVersion};
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the default config file path.
pub fn default_path() -> Result<PathBuf> {
    ProjectDirs::from("dev", "flora", "flora")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Group version used by `resolve` when `--prefer` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_group_version: Option<String>,

    /// Log level or filter directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Log output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Load config from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the default config; a
    /// missing explicit path is an error.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (default_path()?, false),
        };

        if !required && !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_json(&contents).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Parse config from a JSON document.
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.preferred()?;
        Ok(config)
    }

    /// Returns the configured preferred group version, if any.
    pub fn preferred(&self) -> Result<Option<GroupVersion>> {
        self.preferred_group_version
            .as_deref()
            .map(parse_group_version)
            .transpose()
            .context("Invalid preferred_group_version")
    }
}
