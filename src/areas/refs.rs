//! HEAD pointer
//!
//! `.hunter/HEAD` holds the hex id of the most recent commit as plain text. A missing or
//! empty file means there are no commits yet.

use crate::areas::atomic;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the HEAD file (typically `.hunter/HEAD`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> &Path {
        &self.path
    }

    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let content = match std::fs::read_to_string(self.head_path()) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("Unable to read HEAD file {}", self.path.display())
                });
            }
        };

        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string())
            .map(Some)
            .with_context(|| format!("HEAD file {} is corrupt", self.path.display()))
    }

    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        atomic::write_file(self.head_path(), oid.as_ref().as_bytes())
            .with_context(|| format!("Unable to update HEAD to {}", oid))
    }
}
