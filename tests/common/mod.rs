//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Repository, Signature};

use gommit::config::CONFIG_FILE_NAME;

/// A throwaway git repository for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a repository with an initial commit on `branch`.
    pub fn new(branch: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        {
            let mut config = repo.config().expect("Failed to open repo config");
            config
                .set_str("user.name", "Test User")
                .expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
            config
                .set_bool("commit.gpgsign", false)
                .expect("Failed to disable signing");
        }

        repo.set_head(&format!("refs/heads/{}", branch))
            .expect("Failed to set HEAD");

        let test_repo = Self { dir, repo };
        test_repo.initial_commit();
        test_repo
    }

    fn initial_commit(&self) {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create sig");
        let tree_id = self
            .repo
            .index()
            .expect("Failed to get index")
            .write_tree()
            .expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        self.repo
            .commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
            .expect("Failed to create initial commit");
    }

    /// Root of the working tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the gommit config file.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".git").join(CONFIG_FILE_NAME)
    }

    /// Write the gommit config file.
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Read the gommit config file.
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read config")
    }

    /// Write a file and add it to the index so there is something to commit.
    pub fn stage_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Message of the HEAD commit.
    pub fn head_message(&self) -> String {
        let commit = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to read HEAD commit");
        commit.message().unwrap_or_default().to_string()
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        let mut walk = self.repo.revwalk().expect("Failed to create revwalk");
        walk.push_head().expect("Failed to push HEAD");
        walk.count()
    }
}

/// Restores the process working directory on drop.
pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub fn set(path: &Path) -> Self {
        let original = std::env::current_dir().expect("failed to get current directory");
        std::env::set_current_dir(path).expect("failed to set current directory");
        Self { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}
