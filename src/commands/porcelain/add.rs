use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeSet;
use std::path::PathBuf;

impl Repository {
    /// Stage files, storing their content as blobs
    ///
    /// Every argument is resolved before anything is written, so one bad path leaves both
    /// the object store and the index untouched.
    pub fn add(&self, paths: &[PathBuf]) -> anyhow::Result<Vec<(String, ObjectId)>> {
        let _lock = self.lock_exclusive()?;

        let mut index = self.index();
        // Load the index file from the disk
        index.rehydrate()?;

        let paths = paths
            .iter()
            .map(|path| self.workspace().resolve_paths(path))
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<BTreeSet<_>>();

        let mut staged = Vec::with_capacity(paths.len());

        for path in paths {
            let blob = self.workspace().parse_blob(&path)?;
            let blob_id = self.database().store(&blob)?;

            tracing::debug!(path = %path, oid = %blob_id, "staged");
            index.add(IndexEntry::new(path.clone(), blob_id.clone()));
            staged.push((path, blob_id));
        }

        index.write_updates()?;

        Ok(staged)
    }
}
