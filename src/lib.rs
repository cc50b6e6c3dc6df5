//! gommit - A git commit wrapper that applies per-branch message prefixes and suffixes.
//!
//! # Overview
//!
//! gommit keeps a `gommit.json` file inside the repository's `.git` directory
//! mapping branch names to a prefix and suffix. Each commit message given with
//! `-m` is wrapped with the settings of the current branch before `git commit`
//! runs. Passing `-pre`/`-suf` overrides the stored values and saves them for
//! later commits on the same branch.

pub mod config;
pub mod error;
pub mod git;
pub mod message;
pub mod repo;
pub mod workflow;

// Re-export commonly used types
pub use config::{BranchSettings, Config, ConfigStore};
pub use error::{ComposeError, ConfigError, GitError, RepoError, WorkflowError};
pub use git::{GitExecutor, SystemGit};
pub use message::{ComposedMessage, Overrides};
pub use workflow::{RunOptions, RunReport};
