//! Commit history traversal
//!
//! - `rev_list`: walks the parent chain from a starting commit towards the root
//!
//! History is linear, so the walk is a plain linked-list traversal.

pub mod rev_list;
