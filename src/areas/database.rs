//! Content-addressed object store
//!
//! Blobs live in `.hunter/objects/<hex-id>` as their exact bytes. Storing is idempotent:
//! the id is computed first and nothing is written when an object with that id exists.
//! Object files are created exclusively, so once published an object is never
//! rewritten, even by a writer racing on the same content.

use crate::areas::atomic;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Store a blob unless it already exists and return its id
    pub fn store(&self, blob: &Blob) -> anyhow::Result<ObjectId> {
        let object_id = blob.object_id()?;
        let object_path = self.object_path(&object_id);

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        let created = atomic::publish_file(&object_path, &blob.serialize()?)
            .with_context(|| format!("Unable to write object {}", object_id))?;
        tracing::debug!(oid = %object_id, size = blob.len(), created, "stored object");

        Ok(object_id)
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.object_path(object_id);

        if !object_path.is_file() {
            return Err(RepositoryError::ObjectNotFound(object_id.to_string()).into());
        }

        std::fs::read(&object_path)
            .map(Bytes::from)
            .with_context(|| format!("Unable to read object file {}", object_path.display()))
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        Blob::deserialize(Cursor::new(self.load(object_id)?))
    }
}
