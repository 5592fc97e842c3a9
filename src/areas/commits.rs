//! Commit log
//!
//! Commit records live in `.hunter/commits/<hex-id>`. Records are immutable: a record is
//! written once under the digest of its body and never touched again. Loading a record
//! checks that the digest of its body matches both the id on its first line and its
//! file name.

use crate::areas::atomic;
use crate::artifacts::index::FileMap;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct CommitLog {
    path: Box<Path>,
}

impl CommitLog {
    pub fn new(path: Box<Path>) -> Self {
        CommitLog { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    pub fn commit_path(&self, commit_id: &ObjectId) -> PathBuf {
        self.path.join(commit_id.to_path())
    }

    pub fn contains(&self, commit_id: &ObjectId) -> bool {
        self.commit_path(commit_id).is_file()
    }

    /// Persist a commit record and return its id
    pub fn store(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let (commit_id, record) = commit.encode_record()?;
        let commit_path = self.commit_path(&commit_id);

        if !commit_path.exists() {
            atomic::publish_file(&commit_path, &record)
                .with_context(|| format!("Unable to write commit {}", commit_id))?;
        }
        tracing::debug!(oid = %commit_id, files = commit.files().len(), "stored commit");

        Ok(commit_id)
    }

    /// Read and verify a commit record
    pub fn load(&self, commit_id: &ObjectId) -> anyhow::Result<Commit> {
        let commit_path = self.commit_path(commit_id);

        if !commit_path.is_file() {
            return Err(RepositoryError::ObjectNotFound(commit_id.to_string()).into());
        }

        let data = std::fs::read(&commit_path)
            .with_context(|| format!("Unable to read commit file {}", commit_path.display()))?;
        let corrupt = |reason: String| RepositoryError::CorruptRecord {
            path: commit_path.clone(),
            reason,
        };

        let record = Commit::decode_record(&data).map_err(|error| corrupt(format!("{error:#}")))?;

        if !record.is_intact() {
            return Err(corrupt(format!(
                "body hashes to {} but the record declares {}",
                record.computed_oid, record.declared_oid
            ))
            .into());
        }
        if &record.declared_oid != commit_id {
            return Err(corrupt(format!(
                "record declares {} but is stored as {}",
                record.declared_oid, commit_id
            ))
            .into());
        }
        if record.skipped > 0 {
            tracing::warn!(
                path = %commit_path.display(),
                skipped = record.skipped,
                "skipped malformed commit listing lines"
            );
        }

        Ok(record.commit)
    }

    /// Files recorded by a commit; no commit means no files
    pub fn files_for(&self, commit_id: Option<&ObjectId>) -> anyhow::Result<FileMap> {
        match commit_id {
            Some(commit_id) => Ok(self.load(commit_id)?.into_files()),
            None => Ok(FileMap::new()),
        }
    }

    /// Walk the chain from `start` towards the root commit
    pub fn ancestors(&self, start: Option<ObjectId>) -> RevList<'_> {
        RevList::new(self, start)
    }
}
