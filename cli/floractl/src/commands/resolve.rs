//! Resolve command.

use anyhow::Result;
use clap::Args;
use flora_scheme::{parse_group_version, parse_kind_arg, GroupVersion, GroupVersionKind};
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{print_info, print_output, OutputFormat};

use super::CommandContext;

/// Pick the preferred kind out of a list of candidates.
///
/// An exact group and version match wins; otherwise the first candidate in
/// the same group is used.
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Preferred group version, e.g. `apps/v1`. Defaults to the config file.
    #[arg(long, value_name = "GROUP/VERSION")]
    prefer: Option<String>,

    /// Candidates as `<kind>.<version>.<group>`, in preference order.
    #[arg(required = true, value_name = "KIND.VERSION.GROUP")]
    candidates: Vec<String>,
}

/// How the resolved candidate matched the preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum MatchKind {
    Exact,
    Group,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Exact => f.write_str("exact"),
            MatchKind::Group => f.write_str("group"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct Resolved {
    #[tabled(rename = "Group")]
    group: String,

    #[tabled(rename = "Version")]
    version: String,

    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Match")]
    matched: MatchKind,
}

impl ResolveCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let preferred = match self.prefer.as_deref() {
            Some(prefer) => parse_group_version(prefer).map_err(CliError::from)?,
            None => ctx.config.preferred()?.ok_or(CliError::NoPreference)?,
        };
        let candidates = parse_candidates(&self.candidates)?;

        debug!(
            preferred = %preferred,
            candidates = candidates.len(),
            "Resolving preferred kind"
        );

        let resolved = resolve(&preferred, &candidates)?;
        info!(
            group = %resolved.group,
            version = %resolved.version,
            kind = %resolved.kind,
            matched = %resolved.matched,
            "Resolved kind"
        );

        if ctx.format == OutputFormat::Table && resolved.matched == MatchKind::Group {
            print_info(&format!(
                "{} not available, using {}/{}",
                preferred, resolved.group, resolved.version
            ));
        }
        print_output(&[resolved], ctx.format);

        Ok(())
    }
}

fn parse_candidates(args: &[String]) -> Result<Vec<GroupVersionKind>, CliError> {
    args.iter()
        .map(|arg| {
            let (gvk, _) = parse_kind_arg(arg);
            gvk.ok_or_else(|| CliError::InvalidCandidate(arg.clone()))
        })
        .collect()
}

fn resolve(
    preferred: &GroupVersion,
    candidates: &[GroupVersionKind],
) -> Result<Resolved, CliError> {
    let gvk = preferred
        .kind_for_group_version_kinds(candidates)
        .ok_or_else(|| CliError::NoMatch {
            group: preferred.group.clone(),
            preferred: preferred.to_string(),
        })?;

    let matched = if gvk.version == preferred.version {
        MatchKind::Exact
    } else {
        MatchKind::Group
    };

    Ok(Resolved {
        group: gvk.group,
        version: gvk.version,
        kind: gvk.kind,
        matched,
    })
}
