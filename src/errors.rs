//! Error kinds raised by repository operations
//!
//! Every operation returns `anyhow::Result`; the kinds below are the failures a caller may
//! want to tell apart. They can be recovered with `error.downcast_ref::<RepositoryError>()`.
//! Plain I/O failures are not listed here: they surface as `std::io::Error` wrapped in
//! context naming the path that failed.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No `.hunter` directory in the start directory or any of its ancestors
    #[error("not a hunter repository (or any of the parent directories): {0}")]
    NotFound(PathBuf),

    /// The path normalizes to a location outside the repository root
    #[error("'{path}' is outside repository at '{root}'")]
    PathOutsideRepository { path: PathBuf, root: PathBuf },

    /// The path points inside the repository metadata directory
    #[error("'{0}' is inside the repository metadata directory")]
    MetadataPath(PathBuf),

    #[error("nothing to commit: the staging area is empty (use \"hunter add <file>...\")")]
    EmptyStagingArea,

    #[error("aborting commit due to empty commit message")]
    EmptyMessage,

    /// A commit or index record could not be parsed or failed verification
    #[error("corrupt record {path}: {reason}")]
    CorruptRecord { path: PathBuf, reason: String },

    #[error("object not found: {0}")]
    ObjectNotFound(String),
}
