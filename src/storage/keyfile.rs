//! Munge key file persistence.
//!
//! The key file holds the raw key bytes and nothing else. It is always left
//! readable and writable by its owner only.
//!
//! Writes truncate the file in place. A write that fails part way can leave
//! the file truncated or partially written.

use crate::crypto::key::MungeKey;
use crate::error::{MungeError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Permission bits of the key file: owner read/write only.
pub const KEY_FILE_MODE: u32 = 0o600;

/// A munge key file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    /// Bind a key file handle to `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the key file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the key currently stored in the file.
    pub fn read(&self) -> Result<MungeKey> {
        read_key(&self.path)
    }

    /// Replace the stored key.
    pub fn write(&self, key: &MungeKey) -> Result<()> {
        write_key(&self.path, key)
    }
}

/// Read a munge key file.
///
/// The whole file is returned as the key; its size and contents are not
/// checked. Fails with [`MungeError::NotFoundError`] if the file does not
/// exist.
///
/// # Example
///
/// ```rust,no_run
/// use mungectl::storage::keyfile::read_key;
/// use std::path::Path;
///
/// let key = read_key(Path::new("/var/snap/slurm/common/etc/munge/munge.key")).unwrap();
/// println!("{} byte key", key.len());
/// ```
pub fn read_key(path: &Path) -> Result<MungeKey> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MungeError::NotFoundError(path.to_path_buf()),
        _ => MungeError::IoError(e),
    })?;

    debug!(path = %path.display(), len = bytes.len(), "read munge key file");
    Ok(MungeKey::from_bytes(bytes))
}

/// Write a munge key file, replacing any previous contents.
///
/// The file is created if missing. Its mode is set to [`KEY_FILE_MODE`]
/// before the old contents are discarded, including when an existing file
/// had looser permissions, so a failed chmod leaves the old key in place.
///
/// # Example
///
/// ```rust,no_run
/// use mungectl::crypto::key::generate_key;
/// use mungectl::storage::keyfile::write_key;
/// use std::path::Path;
///
/// # fn example() -> mungectl::error::Result<()> {
/// let key = generate_key()?;
/// write_key(Path::new("/var/snap/slurm/common/etc/munge/munge.key"), &key)?;
/// # Ok(())
/// # }
/// ```
pub fn write_key(path: &Path, key: &MungeKey) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(false);
    #[cfg(unix)]
    options.mode(KEY_FILE_MODE);

    let mut file = options.open(path)?;

    // mode() only applies when the file is created
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(KEY_FILE_MODE))?;

    file.set_len(0)?;
    file.write_all(key.as_bytes())?;
    file.sync_all()?;

    debug!(path = %path.display(), len = key.len(), "wrote munge key file");
    Ok(())
}
