//! Command implementations
//!
//! Commands are `impl Repository` blocks, organized into two categories:
//!
//! - `plumbing`: Direct object access (hash-object, cat-file)
//! - `porcelain`: Version control workflow (init, add, commit, status, log)

pub mod plumbing;
pub mod porcelain;
