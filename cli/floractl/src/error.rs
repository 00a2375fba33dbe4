//! Error handling and display for the CLI.

use colored::Colorize;
use flora_scheme::SchemeError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid candidate '{0}': expected <kind>.<version>.<group>")]
    InvalidCandidate(String),

    #[error("No candidate matches group '{group}' (preferred {preferred})")]
    NoMatch { group: String, preferred: String },

    #[error("No preferred group version. Use --prefer or set preferred_group_version in the config file.")]
    NoPreference,

    #[error(transparent)]
    Scheme(#[from] SchemeError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidCandidate(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Candidates look like `Deployment.v1.apps`.".yellow()
                );
            }
            CliError::Scheme(SchemeError::MalformedIdentifier { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Group versions look like `apps/v1`, or `v1` for the core group."
                        .yellow()
                );
            }
            _ => {}
        }
    }
}
