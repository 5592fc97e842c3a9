//! Working tree status inspection
//!
//! Compares the working tree against the index and the HEAD commit.
//!
//! ## Components
//!
//! - `file_change`: Change kinds for the staged and unstaged axes
//! - `inspector`: Per-path comparison rules
//! - `status_info`: Gathering inputs and aggregating the result

pub mod file_change;
pub mod inspector;
pub mod status_info;
