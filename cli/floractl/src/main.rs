//! floractl - CLI for flora resource identities
//!
//! Parses group/version/kind strings the way flora components do and
//! resolves a preferred version against a list of candidates.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod flag;
mod logging;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Accept `--log_level` as well as `--log-level`
    let normalized = flag::normalize_args(std::env::args_os());
    let cli = Cli::parse_from(normalized.args);

    // Run the command
    if let Err(e) = cli.run(&normalized.renamed).await {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
