//! Data structures and algorithms that do not touch the filesystem themselves
//!
//! - `index`: Listing format shared by the index file and commit records
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, commit) and their ids
//! - `status`: Working tree status classification

pub mod index;
pub mod log;
pub mod objects;
pub mod status;
