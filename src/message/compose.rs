//! Wrap a user message with the effective prefix and suffix.

use crate::config::BranchSettings;
use crate::error::ComposeError;

/// Prefix/suffix supplied on the command line for this invocation.
///
/// An empty string counts as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Overrides {
    fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }

    fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether any override was given.
    pub fn is_empty(&self) -> bool {
        self.prefix().is_none() && self.suffix().is_none()
    }
}

/// Result of composing a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub prefix: String,
    pub suffix: String,
    /// Final message passed to `git commit -m`.
    pub message: String,
    /// True when an override was given and the branch settings should be saved.
    pub update_needed: bool,
}

impl ComposedMessage {
    /// Effective settings to persist for the branch.
    pub fn settings(&self) -> BranchSettings {
        BranchSettings::new(self.prefix.clone(), self.suffix.clone())
    }
}

/// Compose the final commit message.
///
/// Overrides win over stored settings. The parts are always joined with
/// single spaces, so an empty prefix or suffix leaves a leading or trailing
/// space in the message.
pub fn compose(
    overrides: &Overrides,
    stored: &BranchSettings,
    message: &str,
) -> Result<ComposedMessage, ComposeError> {
    if message.is_empty() {
        return Err(ComposeError::EmptyMessage);
    }

    let prefix = overrides.prefix().unwrap_or(stored.prefix.as_str()).to_string();
    let suffix = overrides.suffix().unwrap_or(stored.suffix.as_str()).to_string();
    let update_needed = !overrides.is_empty();

    let message = [prefix.as_str(), message, suffix.as_str()].join(" ");

    Ok(ComposedMessage {
        prefix,
        suffix,
        message,
        update_needed,
    })
}
