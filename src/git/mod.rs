//! Git operations by shelling out to the system `git` binary.

pub mod branch;
pub mod commit;
pub mod executor;

pub use branch::{current_branch, try_current_branch};
pub use commit::commit;
pub use executor::{GIT_ENV_VAR, GitExecutor, GitOutput, SystemGit};
