//! Index entries and the listing format
//!
//! The staging file and the file section of a commit record share one text format:
//! one line per entry, `<hex-hash>\t<repo-relative-path>\n`, sorted by path, no blank
//! lines and no carriage returns.
//!
//! Reading is lenient: a line that does not split into a valid hash and a valid path is
//! skipped and counted, so the caller can log how much was dropped.

use crate::artifacts::index::{FileMap, SEPARATOR};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// One staged file: repository-relative path and the blob it points to
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct IndexEntry {
    pub path: String,
    pub oid: ObjectId,
}

impl IndexEntry {
    /// Parse a single listing line (without its trailing newline)
    pub fn parse_line(line: &str) -> Option<Self> {
        let (oid, path) = line.split_once(SEPARATOR)?;
        let oid = ObjectId::try_parse(oid.to_string()).ok()?;

        if !is_valid_path(path) {
            return None;
        }

        Some(IndexEntry::new(path.to_string(), oid))
    }

    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.oid, SEPARATOR, self.path)
    }
}

/// Result of a lenient listing parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub entries: FileMap,
    /// Number of non-empty lines that could not be parsed
    pub skipped: usize,
}

impl Listing {
    pub fn parse(text: &str) -> Self {
        let mut listing = Listing::default();

        for line in text.split('\n').filter(|line| !line.is_empty()) {
            match IndexEntry::parse_line(line) {
                // last write wins for duplicated paths
                Some(entry) => {
                    listing.entries.insert(entry.path, entry.oid);
                }
                None => listing.skipped += 1,
            }
        }

        listing
    }
}

/// Serialize entries in path order; identical maps give byte-identical output
pub fn serialize_listing(entries: &FileMap) -> String {
    entries
        .iter()
        .map(|(path, oid)| IndexEntry::new(path.clone(), oid.clone()).to_line())
        .collect()
}

/// A stored path is relative, uses `/`, and has no empty, `.` or `..` components
pub fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && !path.contains(['\n', '\r', '\\'])
        && path
            .split('/')
            .all(|component| !component.is_empty() && component != "." && component != "..")
}
