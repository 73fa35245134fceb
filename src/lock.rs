//! File-based locking to prevent concurrent publication.
//!
//! Uses flock-style advisory locking so a scheduled run and a manual run
//! cannot rotate the same artifact's backup at the same time. The lock
//! file lives next to the output artifact.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A guard holding an exclusive lock for one output artifact.
/// The lock is released when the guard is dropped.
pub struct LockGuard {
    _file: File,
}

impl LockGuard {
    /// Acquire an exclusive lock for publishing to `target`.
    /// Returns an error if another run already holds it.
    ///
    /// Opens with create+read+write (no truncate) to avoid a TOCTOU race
    /// between file creation and lock acquisition.
    pub fn acquire(target: &Path) -> Result<Self> {
        let lock_path = lock_path(target);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file: {:?}", lock_path))?;

        // Owner read/write only
        fs::set_permissions(&lock_path, fs::Permissions::from_mode(0o600))
            .context("Failed to set lock file permissions")?;

        file.try_lock_exclusive().map_err(|_| {
            anyhow::anyhow!(
                "Another hostsink run is already publishing to {:?}. \
                 Wait for it to finish or remove a stale {:?}.",
                target,
                lock_path
            )
        })?;

        Ok(Self { _file: file })
    }
}

/// Lock sibling for a target path: the path with `.lock` appended.
fn lock_path(target: &Path) -> PathBuf {
    let mut os = target.as_os_str().to_os_string();
    os.push(".lock");
    PathBuf::from(os)
}
