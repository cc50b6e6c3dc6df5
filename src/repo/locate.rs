//! Walk up from a start directory to find the `.git` metadata directory.
//!
//! The walk is pure path computation; the process working directory is
//! never changed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::RepoError;

/// Name of the git metadata directory.
pub const GIT_DIR_NAME: &str = ".git";

/// Find the metadata directory starting from `start`.
///
/// Checks `start` and then each ancestor for a `.git` directory. A `.git`
/// file (as used by linked worktrees) does not count. Returns
/// `RepoError::NotARepository` once the filesystem root has been checked.
pub fn find_git_dir(start: &Path) -> Result<PathBuf, RepoError> {
    for dir in start.ancestors() {
        let candidate = dir.join(GIT_DIR_NAME);
        match std::fs::metadata(&candidate) {
            Ok(meta) if meta.is_dir() => {
                debug!("Found git directory at {}", candidate.display());
                return Ok(candidate);
            }
            Ok(_) => debug!("{} is not a directory, skipping", candidate.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(RepoError::Probe {
                    path: candidate,
                    source: e,
                });
            }
        }
    }

    Err(RepoError::NotARepository {
        start: start.to_path_buf(),
    })
}
