//! Plumbing commands (low-level operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob id and optionally store the blob
//! - `cat-file`: Print a stored blob or commit

pub mod cat_file;
pub mod hash_object;
