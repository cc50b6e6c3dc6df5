//! Load and save `gommit.json` inside the git directory.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ConfigError;

use super::model::{Config, DEFAULT_CONFIG};

/// File name of the config document inside the git directory.
pub const CONFIG_FILE_NAME: &str = "gommit.json";

/// Handle to the config file a [`Config`] was loaded from.
///
/// Returned by [`ConfigStore::load`] and passed explicitly to
/// [`ConfigStore::save`], so saving always targets the file that was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Open (creating if absent) and parse the config file in `git_dir`.
    ///
    /// An empty or whitespace-only file is treated as [`DEFAULT_CONFIG`].
    pub fn load(git_dir: &Path) -> Result<(Self, Config), ConfigError> {
        let path = git_dir.join(CONFIG_FILE_NAME);

        let mut file = open_or_create(&path).map_err(|source| ConfigError::Open {
            path: path.clone(),
            source,
        })?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;

        let document = if content.iter().all(u8::is_ascii_whitespace) {
            debug!("{} is empty, using default config", path.display());
            DEFAULT_CONFIG.as_bytes()
        } else {
            content.as_slice()
        };

        let config: Config =
            serde_json::from_slice(document).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(
            "Loaded {} branch entries from {}",
            config.branches.len(),
            path.display()
        );

        Ok((Self { path }, config))
    }

    /// Replace the file contents with `config`.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// original, so the file never holds a partial or stale document.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let mut document = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
        document.push('\n');

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(document.as_bytes()).map_err(write_err)?;
        // Keep the mode of the file being replaced; temp files start as 0600.
        match std::fs::metadata(&self.path) {
            Ok(meta) => tmp
                .as_file()
                .set_permissions(meta.permissions())
                .map_err(write_err)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(write_err(e)),
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        debug!("Wrote config to {}", self.path.display());
        Ok(())
    }

    /// Path of the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open the config file read-only, creating it empty if it does not exist.
fn open_or_create(path: &Path) -> std::io::Result<File> {
    match File::open(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Creating {}", path.display());
            OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
        }
        result => result,
    }
}
