use crate::areas::commits::CommitLog;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use std::collections::HashSet;

/// Iterator over `(id, commit)` pairs from a starting commit back to the root
///
/// A commit that cannot be loaded is yielded as an error and ends the walk.
pub struct RevList<'c> {
    commits: &'c CommitLog,
    current_commit_oid: Option<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'c> RevList<'c> {
    pub fn new(commits: &'c CommitLog, start: Option<ObjectId>) -> Self {
        RevList {
            commits,
            current_commit_oid: start,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        if !self.visited.insert(commit_oid.clone()) {
            return Some(Err(RepositoryError::CorruptRecord {
                path: self.commits.commit_path(&commit_oid),
                reason: "commit history loops back on itself".to_string(),
            }
            .into()));
        }

        match self.commits.load(&commit_oid) {
            Ok(commit) => {
                // move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
