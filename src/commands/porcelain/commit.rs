use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use chrono::{DateTime, FixedOffset, Local};
use std::io::Write;

impl Repository {
    /// Record the staged files as a new commit and make it HEAD
    ///
    /// The index is cleared only after the record and HEAD are on disk; if any earlier
    /// step fails the staging area is left as it was.
    pub fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        let message = message.trim();
        if message.is_empty() {
            return Err(RepositoryError::EmptyMessage.into());
        }

        let mut index = self.index();
        // An empty staging area is rejected before the lock file can be created
        index.rehydrate()?;
        if index.is_empty() {
            return Err(RepositoryError::EmptyStagingArea.into());
        }

        let _lock = self.lock_exclusive()?;

        // Reload under the lock, another process may have committed in between
        index.rehydrate()?;
        if index.is_empty() {
            return Err(RepositoryError::EmptyStagingArea.into());
        }

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let timestamp = self.commit_timestamp(parent.as_ref())?;
        let commit = Commit::new(
            parent,
            timestamp,
            message.to_string(),
            index.entries().clone(),
        );

        let commit_id = self.commits().store(&commit)?;
        self.refs().update_head(&commit_id)?;
        index.clear()?;

        tracing::debug!(oid = %commit_id, files = commit.files().len(), "commit created");

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }

    /// Current time, or the configured override, never earlier than the parent's
    fn commit_timestamp(&self, parent: Option<&ObjectId>) -> anyhow::Result<DateTime<FixedOffset>> {
        let now = self
            .config()
            .commit_date()?
            .unwrap_or_else(|| Local::now().fixed_offset());

        let Some(parent) = parent else {
            return Ok(now);
        };

        let parent_timestamp = self.commits().load(parent)?.timestamp();
        Ok(if now < parent_timestamp {
            parent_timestamp
        } else {
            now
        })
    }
}
