//! Create a commit with a composed message.

use crate::error::GitError;

use super::executor::GitExecutor;

/// Run `git commit -m <message>` and return git's stdout.
pub fn commit(git: &dyn GitExecutor, message: &str) -> Result<String, GitError> {
    let output = git.run(&[
        "commit".to_string(),
        "-m".to_string(),
        message.to_string(),
    ])?;
    Ok(output.stdout)
}
