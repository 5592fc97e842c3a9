//! Per-path comparisons between HEAD, the index and the working tree
//!
//! These functions only look at data that has already been gathered. The working tree
//! side is described by a [`WorkspaceState`], which carries a hash only for paths whose
//! classification depends on the content.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{IndexChangeType, WorkspaceChangeType};

/// What the working tree holds at a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceState {
    /// Nothing at the path, or only a directory
    Missing,
    /// A file exists but its content was not needed
    Present,
    /// A file exists and hashes to the given id
    Hashed(ObjectId),
    /// A file exists but could not be read
    Unreadable,
}

impl WorkspaceState {
    pub fn is_present(&self) -> bool {
        !matches!(self, WorkspaceState::Missing)
    }

    fn matches(&self, oid: &ObjectId) -> bool {
        matches!(self, WorkspaceState::Hashed(hashed) if hashed == oid)
    }
}

/// Whether the working copy has to be hashed to classify a path
pub fn needs_content(in_head: bool, in_index: bool) -> bool {
    in_head || in_index
}

/// Staged axis
///
/// A path that is only in HEAD counts as a staged deletion once it is also gone from
/// the working tree; while the file is still there it is tracked through HEAD.
pub fn check_index_against_head_tree(
    index_entry: Option<&ObjectId>,
    head_entry: Option<&ObjectId>,
    workspace: &WorkspaceState,
) -> IndexChangeType {
    match (index_entry, head_entry) {
        (Some(index_oid), Some(head_oid)) if index_oid != head_oid => IndexChangeType::Modified,
        (Some(_), None) => IndexChangeType::Added,
        (None, Some(_)) if !workspace.is_present() => IndexChangeType::Deleted,
        _ => IndexChangeType::None,
    }
}

/// Unstaged axis
///
/// Indexed paths are compared with their index entry. Paths tracked only through HEAD
/// are compared with the HEAD entry, and a missing one is left to the staged axis.
pub fn check_against_workspace(
    index_entry: Option<&ObjectId>,
    head_entry: Option<&ObjectId>,
    workspace: &WorkspaceState,
) -> WorkspaceChangeType {
    match (index_entry, head_entry, workspace) {
        (None, None, _) => WorkspaceChangeType::None,
        (Some(_), _, WorkspaceState::Missing) => WorkspaceChangeType::Deleted,
        (None, Some(_), WorkspaceState::Missing) => WorkspaceChangeType::None,
        (Some(expected), _, state) | (None, Some(expected), state) if !state.matches(expected) => {
            WorkspaceChangeType::Modified
        }
        _ => WorkspaceChangeType::None,
    }
}

/// A file nobody tracks: not staged and not in HEAD
pub fn is_untracked(
    index_entry: Option<&ObjectId>,
    head_entry: Option<&ObjectId>,
    workspace: &WorkspaceState,
) -> bool {
    index_entry.is_none() && head_entry.is_none() && workspace.is_present()
}
