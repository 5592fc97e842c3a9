//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Create the repository metadata
//! - `add`: Stage files for commit
//! - `commit`: Record the staging area as a new commit
//! - `status`: Show staged, unstaged and untracked changes
//! - `log`: Show commit history

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
