//! Core repository components
//!
//! Everything below lives in the `.hunter` metadata directory or in the working tree:
//!
//! - `database`: Blob store, one file per object under `.hunter/objects/`
//! - `commits`: Commit log, one record per commit under `.hunter/commits/`
//! - `index`: Staging area persisted as `.hunter/index`
//! - `refs`: The HEAD pointer
//! - `workspace`: Working directory traversal and path resolution
//! - `lock`: Advisory lock serializing writers across processes
//! - `repository`: Root discovery and coordination of the areas above

pub(crate) mod atomic;
pub mod commits;
pub mod database;
pub mod index;
pub mod lock;
pub mod refs;
pub mod repository;
pub mod workspace;
