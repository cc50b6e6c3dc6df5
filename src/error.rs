//! Error types for gommit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from locating the repository metadata directory.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Not a git repository (or any of the parent directories): {}", start.display())]
    NotARepository { start: PathBuf },

    #[error("Failed to look for .git directory in {}: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from reading or writing the gommit config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to open config file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from composing the commit message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Abort due to empty commit message")]
    EmptyMessage,
}

/// Errors from git subprocess invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found: {0}")]
    NotInstalled(String),

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the commit workflow.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("Can't exec git commit: {0}")]
    CommitFailed(#[source] GitError),

    #[error("Failed to update config: {source}\nEdit manually at {}", path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}
