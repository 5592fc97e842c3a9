//! Stored object types
//!
//! Everything hunter persists is identified by a SHA-1 hash. There are two kinds:
//!
//! - **Blob**: File content (raw bytes), stored in `.hunter/objects/`
//! - **Commit**: Snapshot of the index with parent link, timestamp and message,
//!   stored in `.hunter/commits/`
//!
//! Blobs are hashed over their exact bytes; commits are hashed over their serialized body.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
