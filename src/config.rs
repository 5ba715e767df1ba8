//! Key file location.
//!
//! The library never looks at the process environment. Callers build a
//! [`KeyConfig`] explicitly, either from the snap's common data directory or
//! from a path they already have.

use crate::storage::keyfile::KeyFile;
use std::path::{Path, PathBuf};

/// Environment variable the CLI reads the snap common directory from.
pub const SNAP_COMMON_ENV: &str = "SNAP_COMMON";

/// Location of the key file relative to the snap common directory.
pub const DEFAULT_KEY_RELATIVE_PATH: &str = "etc/munge/munge.key";

/// Where the munge key file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    pub key_path: PathBuf,
}

impl KeyConfig {
    /// Use the conventional key location under a snap common directory.
    ///
    /// # Example
    ///
    /// ```
    /// use mungectl::config::KeyConfig;
    /// use std::path::Path;
    ///
    /// let config = KeyConfig::from_snap_common("/var/snap/slurm/common");
    /// assert_eq!(
    ///     config.key_path,
    ///     Path::new("/var/snap/slurm/common/etc/munge/munge.key")
    /// );
    /// ```
    pub fn from_snap_common(root: impl AsRef<Path>) -> Self {
        Self {
            key_path: root.as_ref().join(DEFAULT_KEY_RELATIVE_PATH),
        }
    }

    pub fn with_key_path(path: impl Into<PathBuf>) -> Self {
        Self {
            key_path: path.into(),
        }
    }

    /// Get a handle on the configured key file.
    pub fn key_file(&self) -> KeyFile {
        KeyFile::new(&self.key_path)
    }
}
