//! # flora-version
//!
//! Build information embedded into flora binaries.
//!
//! Release builds stamp the git fields through environment variables read at
//! compile time:
//!
//! - `FLORA_GIT_VERSION`: semantic version, e.g. `v1.2.0`
//! - `FLORA_GIT_COMMIT`: output of `git rev-parse HEAD`
//! - `FLORA_GIT_TREE_STATE`: `clean` or `dirty`
//! - `FLORA_BUILD_DATE`: ISO 8601, output of `date -u +'%Y-%m-%dT%H:%M:%SZ'`
//!
//! Unstamped builds report placeholder values.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Padding, Style};

const DEFAULT_GIT_VERSION: &str = "v0.0.0-master+$Format:%h$";
const DEFAULT_GIT_COMMIT: &str = "$Format:%H$";
const DEFAULT_BUILD_DATE: &str = "1970-01-01T00:00:00Z";

/// Stamped semantic version, or the placeholder for unstamped builds.
pub const GIT_VERSION: &str = match option_env!("FLORA_GIT_VERSION") {
    Some(version) => version,
    None => DEFAULT_GIT_VERSION,
};

/// Versioning information for a binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub git_version: String,
    pub git_commit: String,
    pub git_tree_state: String,
    pub build_date: String,
    pub rust_version: String,
    pub compiler: String,
    pub platform: String,
}

/// Returns the version information of the running binary.
pub fn get() -> Info {
    Info {
        git_version: GIT_VERSION.to_string(),
        git_commit: option_env!("FLORA_GIT_COMMIT")
            .unwrap_or(DEFAULT_GIT_COMMIT)
            .to_string(),
        git_tree_state: option_env!("FLORA_GIT_TREE_STATE")
            .unwrap_or_default()
            .to_string(),
        build_date: option_env!("FLORA_BUILD_DATE")
            .unwrap_or(DEFAULT_BUILD_DATE)
            .to_string(),
        rust_version: env!("FLORA_RUSTC_VERSION").to_string(),
        compiler: "rustc".to_string(),
        platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
    }
}

impl Info {
    /// Renders the information as a two-column table, labels right-aligned
    /// and separated from values by a single space.
    pub fn text(&self) -> String {
        let mut builder = Builder::default();
        for (label, value) in self.rows() {
            builder.push_record([label, value]);
        }

        let mut table = builder.build();
        table
            .with(Style::empty())
            .with(Padding::zero())
            .modify(Columns::first(), Alignment::right())
            .modify(Columns::first(), Padding::new(0, 1, 0, 0));

        // The value column is padded to its widest cell.
        table
            .to_string()
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the information as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("gitVersion:", self.git_version.as_str()),
            ("gitCommit:", self.git_commit.as_str()),
            ("gitTreeState:", self.git_tree_state.as_str()),
            ("buildDate:", self.build_date.as_str()),
            ("rustVersion:", self.rust_version.as_str()),
            ("compiler:", self.compiler.as_str()),
            ("platform:", self.platform.as_str()),
        ]
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
