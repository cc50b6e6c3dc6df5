//! Resolve the currently checked-out branch.

use tracing::warn;

use crate::error::GitError;

use super::executor::GitExecutor;

/// Ask git for the current branch name.
///
/// Returns an empty string on a detached HEAD.
pub fn try_current_branch(git: &dyn GitExecutor) -> Result<String, GitError> {
    let output = git.run(&["branch".to_string(), "--show-current".to_string()])?;
    Ok(strip_line_ending(&output.stdout).to_string())
}

/// Current branch name, or an empty string if git could not report one.
///
/// Failure is not fatal: the empty branch maps to empty settings.
pub fn current_branch(git: &dyn GitExecutor) -> String {
    match try_current_branch(git) {
        Ok(branch) => branch,
        Err(e) => {
            warn!("Could not determine current branch: {}", e);
            String::new()
        }
    }
}

/// Drop the trailing newline git prints after the branch name.
fn strip_line_ending(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}
