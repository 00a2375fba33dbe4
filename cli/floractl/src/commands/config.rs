//! Config command.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Show the effective configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the loaded config file contents.
    Show,

    /// Print the default config file path.
    Path,
}

impl ConfigCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Path => {
                println!("{}", config::default_path()?.display());
                Ok(())
            }
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let config = &ctx.config;

    match ctx.format {
        OutputFormat::Json => print_single(config),
        OutputFormat::Table => {
            let preferred = config.preferred()?;
            println!(
                "preferred_group_version: {}",
                preferred.map(|gv| gv.to_string()).as_deref().unwrap_or("-")
            );
            println!("log_level: {}", config.log_level.as_deref().unwrap_or("-"));
            println!(
                "log_format: {}",
                config
                    .log_format
                    .map(|format| format!("{format:?}").to_lowercase())
                    .as_deref()
                    .unwrap_or("-")
            );
        }
    }

    Ok(())
}
