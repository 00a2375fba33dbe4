//! Flag name normalization.
//!
//! Long flags may be spelled with underscores (`--log_level`). They are
//! rewritten to the dashed form clap knows about before parsing, and each
//! rewrite is reported once logging is up.

use std::ffi::OsString;

use tracing::warn;

/// A long flag that was renamed during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFlag {
    pub from: String,
    pub to: String,
}

/// Command line arguments after normalization.
#[derive(Debug, Clone, Default)]
pub struct NormalizedArgs {
    pub args: Vec<OsString>,
    pub renamed: Vec<RenamedFlag>,
}

/// Replaces `_` word separators with `-`.
pub fn word_sep_normalize(name: &str) -> String {
    name.replace('_', "-")
}

/// Normalizes long flag names in `args`.
///
/// The program name, short flags, positionals and flag values are left
/// alone. Everything after a bare `--` is passed through untouched, as is
/// any argument that is not valid UTF-8; clap reports those itself.
pub fn normalize_args<I>(args: I) -> NormalizedArgs
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = NormalizedArgs::default();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.args.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.args.push(arg);
            continue;
        }

        let Some(flag) = arg.to_str().and_then(|s| s.strip_prefix("--")) else {
            out.args.push(arg);
            continue;
        };

        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (flag, None),
        };

        let normalized = word_sep_normalize(name);
        if normalized == name {
            out.args.push(arg);
            continue;
        }

        let rewritten = match value {
            Some(value) => format!("--{normalized}={value}"),
            None => format!("--{normalized}"),
        };
        out.renamed.push(RenamedFlag {
            from: name.to_string(),
            to: normalized,
        });
        out.args.push(rewritten.into());
    }

    out
}

/// Logs a warning for every renamed flag.
pub fn warn_renamed(renamed: &[RenamedFlag]) {
    for flag in renamed {
        warn!(
            from = %flag.from,
            to = %flag.to,
            "--{} is deprecated, use --{} instead",
            flag.from,
            flag.to
        );
    }
}
