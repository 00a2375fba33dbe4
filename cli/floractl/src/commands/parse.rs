//! Parse commands.
//!
//! Each subcommand applies one of the identity grammars to its argument and
//! prints every reading it produces.

use anyhow::Result;
use clap::{Args, Subcommand};
use flora_scheme::{
    parse_group_kind, parse_group_resource, parse_group_version, parse_kind_arg, GroupKind,
    GroupResource, GroupVersion, GroupVersionKind,
};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Parse identity strings.
#[derive(Debug, Args)]
pub struct ParseCommand {
    #[command(subcommand)]
    command: ParseSubcommand,
}

#[derive(Debug, Subcommand)]
enum ParseSubcommand {
    /// Parse `<group>/<version>` or a bare `<version>`.
    GroupVersion {
        /// Input string, e.g. `apps/v1`.
        input: String,
    },

    /// Parse `<kind>.<group>`.
    GroupKind {
        /// Input string, e.g. `Deployment.apps`.
        input: String,
    },

    /// Parse `<kind>.<version>.<group>`, also reading it as `<kind>.<group>`.
    KindArg {
        /// Input string, e.g. `Deployment.v1.apps`.
        input: String,
    },

    /// Parse `<resource>.<group>`.
    GroupResource {
        /// Input string, e.g. `deployments.apps`.
        input: String,
    },
}

/// One reading of an input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub(crate) struct IdentityRow {
    #[tabled(rename = "Form")]
    pub form: &'static str,

    #[tabled(rename = "Group")]
    pub group: String,

    #[tabled(rename = "Version")]
    pub version: String,

    #[tabled(rename = "Kind")]
    pub kind: String,

    #[tabled(rename = "Resource")]
    pub resource: String,

    #[tabled(rename = "Canonical")]
    pub canonical: String,
}

impl From<&GroupVersion> for IdentityRow {
    fn from(gv: &GroupVersion) -> Self {
        Self {
            form: "group-version",
            group: gv.group.clone(),
            version: gv.version.clone(),
            kind: String::new(),
            resource: String::new(),
            canonical: gv.to_string(),
        }
    }
}

impl From<&GroupKind> for IdentityRow {
    fn from(gk: &GroupKind) -> Self {
        Self {
            form: "group-kind",
            group: gk.group.clone(),
            version: String::new(),
            kind: gk.kind.clone(),
            resource: String::new(),
            canonical: gk.to_string(),
        }
    }
}

impl From<&GroupVersionKind> for IdentityRow {
    fn from(gvk: &GroupVersionKind) -> Self {
        Self {
            form: "group-version-kind",
            group: gvk.group.clone(),
            version: gvk.version.clone(),
            kind: gvk.kind.clone(),
            resource: String::new(),
            canonical: format!("{} {}", gvk.group_version(), gvk.group_kind()),
        }
    }
}

impl From<&GroupResource> for IdentityRow {
    fn from(gr: &GroupResource) -> Self {
        Self {
            form: "group-resource",
            group: gr.group.clone(),
            version: String::new(),
            kind: String::new(),
            resource: gr.resource.clone(),
            canonical: gr.to_string(),
        }
    }
}

impl ParseCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = self.command.rows()?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

impl ParseSubcommand {
    fn rows(&self) -> Result<Vec<IdentityRow>, CliError> {
        let rows = match self {
            ParseSubcommand::GroupVersion { input } => {
                vec![IdentityRow::from(&parse_group_version(input)?)]
            }
            ParseSubcommand::GroupKind { input } => {
                vec![IdentityRow::from(&parse_group_kind(input))]
            }
            ParseSubcommand::KindArg { input } => {
                let (gvk, gk) = parse_kind_arg(input);
                gvk.iter()
                    .map(IdentityRow::from)
                    .chain(std::iter::once(IdentityRow::from(&gk)))
                    .collect()
            }
            ParseSubcommand::GroupResource { input } => {
                vec![IdentityRow::from(&parse_group_resource(input))]
            }
        };

        debug!(readings = rows.len(), "Parsed input");
        Ok(rows)
    }
}
