//! Staging area listing format
//!
//! The index stores which blob each path should point to in the next commit.
//!
//! ## File Format
//!
//! ```text
//! <hex-hash>\t<repo-relative-path>\n
//! <hex-hash>\t<repo-relative-path>\n
//! ...
//! ```
//!
//! Lines are sorted by path (byte order) and the file ends with a newline unless it is
//! empty. The same listing is embedded in every commit record.

pub mod index_entry;

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Repository-relative path mapped to a blob id, ordered by path
pub type FileMap = BTreeMap<String, ObjectId>;

/// Separates the hash from the path on a listing line
pub const SEPARATOR: char = '\t';
