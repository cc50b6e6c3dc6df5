//! Per-branch prefix/suffix configuration stored in the git directory.

pub mod model;
pub mod store;

pub use model::{BranchSettings, Config, DEFAULT_CONFIG};
pub use store::{CONFIG_FILE_NAME, ConfigStore};
