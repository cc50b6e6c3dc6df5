//! Commit pipeline: locate config, resolve branch, compose, commit, save.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::ConfigStore;
use crate::error::WorkflowError;
use crate::git::{GitExecutor, commit, current_branch};
use crate::message::{Overrides, compose};
use crate::repo::find_git_dir;

/// Options for one invocation, derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub message: String,
    pub overrides: Overrides,
    pub dry_run: bool,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub branch: String,
    pub message: String,
    pub committed: bool,
    pub config_updated: bool,
}

/// Run the commit pipeline starting the repository search at `start_dir`.
///
/// The branch settings are only saved after a successful commit. With
/// `dry_run` nothing is committed or written.
pub fn run(
    options: &RunOptions,
    start_dir: &Path,
    git: &dyn GitExecutor,
) -> Result<RunReport, WorkflowError> {
    let git_dir = find_git_dir(start_dir)?;
    let (store, mut config) = ConfigStore::load(&git_dir)?;

    let branch = current_branch(git);
    let stored = config.settings_for(&branch);
    debug!("Branch '{}' settings: {:?}", branch, stored);

    let composed = compose(&options.overrides, &stored, &options.message)?;

    let mut report = RunReport {
        branch: branch.clone(),
        message: composed.message.clone(),
        committed: false,
        config_updated: false,
    };

    if options.dry_run {
        println!("{}", composed.message);
        return Ok(report);
    }

    println!("committing to branch ->> {}", branch);

    let output = commit(git, &composed.message).map_err(WorkflowError::CommitFailed)?;
    print!("{}", output);
    report.committed = true;

    if !composed.update_needed {
        return Ok(report);
    }

    if branch.is_empty() {
        warn!("No current branch, not saving prefix/suffix override");
        return Ok(report);
    }

    config.set_settings(&branch, composed.settings());
    store
        .save(&config)
        .map_err(|source| WorkflowError::SaveFailed {
            path: store.path().to_path_buf(),
            source,
        })?;
    report.config_updated = true;

    Ok(report)
}
