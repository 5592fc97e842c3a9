use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Compute the blob id of a file, storing the blob when `write` is set
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<ObjectId> {
        // read object file
        let object_data = std::fs::read(object_path)
            .with_context(|| format!("Unable to read file {}", object_path.display()))?;
        let object = Blob::new(object_data.into());

        let object_id = if write {
            let _lock = self.lock_exclusive()?;
            self.database().store(&object)?
        } else {
            object.object_id()?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(object_id)
    }
}
