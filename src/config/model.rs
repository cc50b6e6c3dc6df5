//! Config document types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Document used when the config file is empty.
pub const DEFAULT_CONFIG: &str = r#"{
	"branches": {}
}"#;

/// Mapping from exact branch name to its message settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub branches: BTreeMap<String, BranchSettings>,
}

/// Prefix and suffix wrapped around commit messages on one branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSettings {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl BranchSettings {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Config {
    /// Settings for `branch`, or empty settings if the branch has no entry.
    pub fn settings_for(&self, branch: &str) -> BranchSettings {
        self.branches.get(branch).cloned().unwrap_or_default()
    }

    /// Replace the settings stored for `branch`.
    pub fn set_settings(&mut self, branch: &str, settings: BranchSettings) {
        self.branches.insert(branch.to_string(), settings);
    }
}
