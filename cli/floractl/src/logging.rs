//! Logging initialization.
//!
//! Logs go to stderr so command output on stdout stays machine readable.
//! `RUST_LOG` wins over the configured level when set.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;

const DEFAULT_LEVEL: &str = "warn";

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging flags shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct LogOptions {
    /// Minimum log level (trace, debug, info, warn, error) or a filter directive.
    #[arg(long, global = true, env = "FLORA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format.
    #[arg(long, global = true, value_enum, env = "FLORA_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Disable colored log output.
    #[arg(long, global = true)]
    pub log_no_color: bool,

    /// Include source file and line in log records.
    #[arg(long, global = true)]
    pub log_caller: bool,
}

/// Effective logging settings after merging flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub color: bool,
    pub caller: bool,
}

impl LogOptions {
    /// Merges flags over the config file, falling back to defaults.
    pub fn resolve(&self, config: &Config) -> LogSettings {
        let level = self
            .log_level
            .clone()
            .or_else(|| config.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        let format = self.log_format.or(config.log_format).unwrap_or_default();

        LogSettings {
            level,
            format,
            color: !self.log_no_color,
            caller: self.log_caller,
        }
    }
}

impl LogSettings {
    /// Builds the level filter, preferring `RUST_LOG`.
    pub fn filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level)
            .with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

/// Installs the global tracing subscriber.
pub fn init(settings: &LogSettings) -> Result<()> {
    let filter = settings.filter()?;

    let layer = match settings.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(settings.caller)
            .with_line_number(settings.caller)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(settings.color)
            .with_file(settings.caller)
            .with_line_number(settings.caller)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to initialize logging")
}
