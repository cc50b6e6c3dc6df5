//! Repository metadata directory discovery.

pub mod locate;

pub use locate::{GIT_DIR_NAME, find_git_dir};
