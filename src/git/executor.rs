//! Running the system `git` binary.
//!
//! Uses `std::process::Command`, inheriting the user's git config, hooks
//! and credential setup.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::error::GitError;

/// Environment variable overriding the git executable.
pub const GIT_ENV_VAR: &str = "GOMMIT_GIT";

/// Default git executable name, resolved on `PATH`.
const DEFAULT_GIT: &str = "git";

/// Captured output of a successful git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for executing git commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitExecutor {
    /// Run git with `args`. A non-zero exit status is an error.
    fn run(&self, args: &[String]) -> Result<GitOutput, GitError>;
}

/// Executor that calls the real git binary.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
    work_dir: Option<PathBuf>,
}

impl SystemGit {
    /// Use a specific git executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            work_dir: None,
        }
    }

    /// Run git in `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Resolve the git executable from `GOMMIT_GIT` or `PATH`.
    ///
    /// Uses the `which` crate for cross-platform executable detection.
    pub fn detect() -> Result<Self, GitError> {
        let requested = git_program();
        let program = which::which(&requested)
            .map_err(|e| GitError::NotInstalled(format!("{}: {}", requested, e)))?;
        debug!("Using git executable {}", program.display());
        Ok(Self::new(program))
    }
}

impl GitExecutor for SystemGit {
    fn run(&self, args: &[String]) -> Result<GitOutput, GitError> {
        debug!("Running git {}", args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(GitError::SpawnFailed)?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            // git commit reports "nothing to commit" on stdout
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(GitError::NonZeroExit {
                command: args.first().cloned().unwrap_or_default(),
                code: output.status.code(),
                stderr: detail,
            });
        }

        Ok(GitOutput { stdout, stderr })
    }
}

/// Git program name from the environment, or the default.
///
/// Logs a warning if the environment variable is set but blank.
fn git_program() -> String {
    match env::var(GIT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v,
        Ok(_) => {
            warn!("{} is set but empty, using {}", GIT_ENV_VAR, DEFAULT_GIT);
            DEFAULT_GIT.to_string()
        }
        Err(_) => DEFAULT_GIT.to_string(),
    }
}

/// Compare captured git arguments against expected ones in mock matchers.
#[cfg(test)]
pub(crate) fn args_eq(args: &[String], expected: &[&str]) -> bool {
    args.len() == expected.len() && args.iter().zip(expected).all(|(a, e)| a == e)
}
