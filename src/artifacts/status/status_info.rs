use crate::areas::repository::Repository;
use crate::artifacts::index::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{
    FileChange, FileChangeType, IndexChangeType, WorkspaceChangeType,
};
use crate::artifacts::status::inspector::{
    WorkspaceState, check_against_workspace, check_index_against_head_tree, is_untracked,
    needs_content,
};
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type ChangeSet = BTreeMap<String, FileChangeType>;
pub type FileSet = BTreeSet<String>;
pub type WorkspaceStates = BTreeMap<String, WorkspaceState>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) head: Option<ObjectId>,
    pub(crate) changed_files: BTreeMap<String, FileChange>,
    pub(crate) index_changeset: ChangeSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
    pub(crate) unreadable_files: FileSet,
}

impl StatusInfo {
    /// Classify every path known to HEAD, the index or the working tree
    pub fn classify(head_files: &FileMap, index_files: &FileMap, workspace: &WorkspaceStates) -> Self {
        let paths = head_files
            .keys()
            .chain(index_files.keys())
            .chain(workspace.keys())
            .collect::<BTreeSet<_>>();

        let mut info = StatusInfo::default();

        for path in paths {
            let head_entry = head_files.get(path);
            let index_entry = index_files.get(path);
            let state = workspace.get(path).unwrap_or(&WorkspaceState::Missing);

            if is_untracked(index_entry, head_entry, state) {
                info.untracked_files.insert(path.clone());
                continue;
            }
            if *state == WorkspaceState::Unreadable {
                info.unreadable_files.insert(path.clone());
            }

            let change = FileChange {
                index_change: check_index_against_head_tree(index_entry, head_entry, state),
                workspace_change: check_against_workspace(index_entry, head_entry, state),
            };
            if change.is_unchanged() {
                continue;
            }

            if change.index_change != IndexChangeType::None {
                info.index_changeset
                    .insert(path.clone(), FileChangeType::Index(change.index_change));
            }
            if change.workspace_change != WorkspaceChangeType::None {
                info.workspace_changeset
                    .insert(path.clone(), FileChangeType::Workspace(change.workspace_change));
            }
            info.changed_files.insert(path.clone(), change);
        }

        info
    }

    pub fn head(&self) -> Option<&ObjectId> {
        self.head.as_ref()
    }

    pub fn changed_files(&self) -> &BTreeMap<String, FileChange> {
        &self.changed_files
    }

    /// Staged changes: index against HEAD
    pub fn index_changeset(&self) -> &ChangeSet {
        &self.index_changeset
    }

    /// Unstaged changes: working tree against the index
    pub fn workspace_changeset(&self) -> &ChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked_files(&self) -> &FileSet {
        &self.untracked_files
    }

    /// Tracked files whose content could not be read; they are reported as modified
    pub fn unreadable_files(&self) -> &FileSet {
        &self.unreadable_files
    }

    pub fn staged(&self, change: IndexChangeType) -> impl Iterator<Item = &str> {
        self.changed_files
            .iter()
            .filter(move |(_, file_change)| file_change.index_change == change)
            .map(|(path, _)| path.as_str())
    }

    pub fn unstaged(&self, change: WorkspaceChangeType) -> impl Iterator<Item = &str> {
        self.changed_files
            .iter()
            .filter(move |(_, file_change)| file_change.workspace_change == change)
            .map(|(path, _)| path.as_str())
    }

    pub fn is_clean(&self) -> bool {
        self.changed_files.is_empty() && self.untracked_files.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Gather HEAD, the index and the working tree, then classify
    ///
    /// Holds the shared repository lock while reading, so an `add` or `commit` running
    /// in another process cannot be observed half-way.
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let _lock = self.repository.lock_shared()?;

        let head = self.repository.refs().read_head()?;
        let head_files = self.repository.commits().files_for(head.as_ref())?;

        let mut index = self.repository.index();
        index.rehydrate()?;
        let index_files = index.entries().clone();
        drop(index);

        let workspace = self.scan_workspace(&head_files, &index_files)?;

        let mut info = StatusInfo::classify(&head_files, &index_files, &workspace);
        info.head = head;

        tracing::debug!(
            staged = info.index_changeset.len(),
            unstaged = info.workspace_changeset.len(),
            untracked = info.untracked_files.len(),
            "status computed"
        );

        Ok(info)
    }

    /// Describe the working tree for every known path, reading each file at most once
    ///
    /// Only tracked files are hashed; untracked files are never opened.
    fn scan_workspace(
        &self,
        head_files: &FileMap,
        index_files: &FileMap,
    ) -> anyhow::Result<WorkspaceStates> {
        let workspace = self.repository.workspace();
        let listed = workspace.list_files()?;

        let paths = head_files
            .keys()
            .chain(index_files.keys())
            .chain(listed.iter())
            .collect::<BTreeSet<_>>();

        let mut states = WorkspaceStates::new();

        for path in paths {
            let present = listed.contains(path) || workspace.exists(path);
            let tracked = needs_content(head_files.contains_key(path), index_files.contains_key(path));

            let state = match (present, tracked) {
                (false, _) => WorkspaceState::Missing,
                (true, false) => WorkspaceState::Present,
                (true, true) => match workspace.hash_file(path) {
                    Ok(oid) => WorkspaceState::Hashed(oid),
                    Err(error) => {
                        tracing::warn!(path = %path, "{error:#}");
                        WorkspaceState::Unreadable
                    }
                },
            };

            states.insert(path.clone(), state);
        }

        Ok(states)
    }
}
