//! Whole-file writes through a temporary sibling
//!
//! Readers either see the previous content or the new one, never a partial write.
//! [`write_file`] renames the temporary file over the target. [`publish_file`] links it
//! into place instead and never replaces a file that is already there.

use anyhow::Context;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn write_file(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let temp_path = temp_sibling(path)?;

    let result = write_and_rename(&temp_path, path, content);
    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }

    result
}

/// Create `path` with `content` unless it already exists
///
/// Returns `false` when another writer got there first; the existing file is kept.
pub fn publish_file(path: &Path, content: &[u8]) -> anyhow::Result<bool> {
    let temp_path = temp_sibling(path)?;

    let result = write_temp(&temp_path, content).and_then(|_| {
        match std::fs::hard_link(&temp_path, path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(error) => Err(error)
                .with_context(|| format!("Unable to link temporary file to {}", path.display())),
        }
    });
    let _ = std::fs::remove_file(&temp_path);

    result
}

fn write_and_rename(temp_path: &Path, path: &Path, content: &[u8]) -> anyhow::Result<()> {
    write_temp(temp_path, content)?;

    std::fs::rename(temp_path, path)
        .with_context(|| format!("Unable to rename temporary file to {}", path.display()))?;

    Ok(())
}

fn write_temp(temp_path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(temp_path)
        .with_context(|| format!("Unable to open temporary file {}", temp_path.display()))?;

    file.write_all(content)
        .with_context(|| format!("Unable to write temporary file {}", temp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("Unable to flush temporary file {}", temp_path.display()))?;

    Ok(())
}

fn temp_sibling(path: &Path) -> anyhow::Result<PathBuf> {
    let dir = path
        .parent()
        .with_context(|| format!("Invalid file path {}", path.display()))?;
    let name = path
        .file_name()
        .with_context(|| format!("Invalid file path {}", path.display()))?
        .to_string_lossy();

    Ok(dir.join(format!(".tmp-{}-{}", name, rand::random::<u32>())))
}
