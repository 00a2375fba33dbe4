//! Version command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Print version information.
#[derive(Debug, Args)]
pub struct VersionCommand {
    /// Print only the version number.
    #[arg(long)]
    short: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionView {
    client_version: flora_version::Info,
}

impl VersionCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let info = flora_version::get();

        match (ctx.format, self.short) {
            (OutputFormat::Json, _) => print_single(&VersionView {
                client_version: info,
            }),
            (OutputFormat::Table, true) => println!("Client Version: {}", info.git_version),
            (OutputFormat::Table, false) => println!("{info}"),
        }

        Ok(())
    }
}
