//! CLI commands.

mod config;
mod parse;
mod resolve;
mod version;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::flag::{self, RenamedFlag};
use crate::logging::{self, LogOptions};
use crate::output::OutputFormat;

/// floractl - Inspect and resolve flora resource identities.
#[derive(Debug, Parser)]
#[command(name = "floractl")]
#[command(author, version = flora_version::GIT_VERSION, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Config file path. Defaults to the platform config directory.
    #[arg(long, global = true, env = "FLORA_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    log: LogOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse identity strings.
    Parse(parse::ParseCommand),

    /// Pick the preferred kind out of a list of candidates.
    Resolve(resolve::ResolveCommand),

    /// Show the effective configuration.
    Config(config::ConfigCommand),

    /// Print version information.
    Version(version::VersionCommand),
}

impl Cli {
    /// Run the CLI command.
    pub async fn run(self, renamed: &[RenamedFlag]) -> Result<()> {
        let config = Config::load(self.config.as_deref()).await?;
        let log = self.log.resolve(&config);
        logging::init(&log)?;
        flag::warn_renamed(renamed);

        debug!(
            format = ?self.format,
            log_level = %log.level,
            config_path = ?self.config,
            "Configuration loaded"
        );

        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx).await,
            Commands::Resolve(cmd) => cmd.run(ctx).await,
            Commands::Config(cmd) => cmd.run(ctx).await,
            Commands::Version(cmd) => cmd.run(ctx).await,
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
