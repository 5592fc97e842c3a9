//! Advisory repository lock
//!
//! A single byte of `.hunter/lock` is locked with an OS file lock. Commands that mutate
//! the repository (`add`, `commit`) take it exclusively, `status` takes it shared. The
//! lock is released when the guard is dropped, including when the process dies.
//!
//! `init` creates the lock file. Readers never create it: a shared lock opens the file
//! read-only and is skipped when the file is missing, so `status` leaves the metadata
//! directory untouched and works on a repository the user cannot write to.

use anyhow::Context;
use file_guard::{FileGuard, Lock};
use std::fs::{File, OpenOptions};
use std::path::Path;

pub struct RepositoryLock {
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    pub fn exclusive(path: &Path) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("Unable to open lock file {}", path.display()))?;

        Self::acquire(file, path, Lock::Exclusive)
    }

    /// Shared lock, or `None` when the lock file does not exist
    pub fn shared(path: &Path) -> anyhow::Result<Option<Self>> {
        let file = match OpenOptions::new().read(true).open(path) {
            Ok(file) => file,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no lock file, reading unlocked");
                return Ok(None);
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Unable to open lock file {}", path.display()));
            }
        };

        Self::acquire(file, path, Lock::Shared).map(Some)
    }

    fn acquire(file: File, path: &Path, lock: Lock) -> anyhow::Result<Self> {
        let guard = file_guard::lock(Box::new(file), lock, 0, 1)
            .with_context(|| format!("Unable to lock {}", path.display()))?;

        Ok(RepositoryLock { _guard: guard })
    }
}
