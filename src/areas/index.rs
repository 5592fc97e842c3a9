//! Staging area (index)
//!
//! The index maps repository-relative paths to the blob each path should point to in the
//! next commit. It is persisted as `.hunter/index` in the listing format described in
//! [`crate::artifacts::index`].
//!
//! ## Lifecycle
//!
//! - `add` loads the file, inserts or overwrites one entry per path and rewrites the
//!   whole file in path order
//! - `commit` copies the entries into the commit record, then clears the file
//!
//! A missing file reads as an empty index. Rewrites go through a temporary file and a
//! rename, so a crash leaves either the old or the new index behind.

use crate::areas::atomic;
use crate::artifacts::index::FileMap;
use crate::artifacts::index::index_entry::{IndexEntry, Listing, serialize_listing};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.hunter/index`)
    path: Box<Path>,
    /// Staged files mapped by path
    entries: FileMap,
    /// Malformed lines dropped by the last load
    skipped: usize,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: FileMap::new(),
            skipped: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk, replacing anything held in memory
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.skipped = 0;

        let content = match std::fs::read(self.path()) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("Unable to read index file {}", self.path.display())
                });
            }
        };

        let listing = Listing::parse(&String::from_utf8_lossy(&content));
        if listing.skipped > 0 {
            tracing::warn!(
                path = %self.path.display(),
                skipped = listing.skipped,
                "skipped malformed index lines"
            );
        }

        self.entries = listing.entries;
        self.skipped = listing.skipped;

        Ok(())
    }

    /// Insert or overwrite the entry for a path
    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.insert(entry.path, entry.oid);
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> &FileMap {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// The listing exactly as it would be written to disk
    pub fn listing(&self) -> String {
        serialize_listing(&self.entries)
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        atomic::write_file(self.path(), self.listing().as_bytes())
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;
        tracing::debug!(entries = self.entries.len(), "index written");

        Ok(())
    }

    /// Empty the index and truncate the file on disk
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.skipped = 0;
        self.write_updates()
    }
}
