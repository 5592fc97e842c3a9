//! Commit record
//!
//! A commit freezes a copy of the index together with a parent link, a timestamp and a
//! message. Its id is the SHA-1 of the serialized body; the stored file is the body
//! preceded by a `commit <id>` line, so a reader can check the record against itself.
//!
//! ## Format (version 1)
//!
//! ```text
//! commit <hex-hash>
//! version: 1
//! parent: <parent-hex-hash or nothing for a root commit>
//! date: <RFC 3339 timestamp>
//! message: <message length in bytes>
//!
//! <message>
//! files: <entry count>
//! <hex-hash>\t<path>
//! ...
//! ```
//!
//! ## Legacy format
//!
//! Older records carry `mestre:` and `data:` headers and mark the file section with the
//! anchor line `arquivos staged (do índice):`. They are still readable; everything after
//! the anchor is parsed as a listing.

use crate::artifacts::index::FileMap;
use crate::artifacts::index::index_entry::{Listing, serialize_listing};
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, SecondsFormat, SubsecRound};

pub const FORMAT_VERSION: u32 = 1;
const RECORD_HEADER: &str = "commit ";
const LEGACY_PARENT_HEADER: &str = "mestre:";
const LEGACY_DATE_HEADER: &str = "data:";
const LEGACY_FILES_ANCHOR: &str = "arquivos staged (do índice):\n";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// None for a root commit
    parent: Option<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    message: String,
    /// Copy of the index at commit time
    files: FileMap,
}

impl Commit {
    /// Create a new commit; the timestamp is truncated to whole seconds so that it
    /// survives a write/read round trip unchanged
    pub fn new(
        parent: Option<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        message: String,
        files: FileMap,
    ) -> Self {
        Commit {
            parent,
            timestamp: timestamp.trunc_subsecs(0),
            message,
            files,
        }
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn into_files(self) -> FileMap {
        self.files
    }

    /// Format timestamp in human-readable form, e.g. "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// Serialize the full record: the id line followed by the body
    pub fn encode_record(&self) -> anyhow::Result<(ObjectId, Bytes)> {
        let body = self.serialize()?;
        let oid = ObjectId::digest(&body);

        let mut record = format!("{RECORD_HEADER}{oid}\n").into_bytes();
        record.extend_from_slice(&body);

        Ok((oid, record.into()))
    }

    /// Parse a full record in either the current or the legacy layout
    pub fn decode_record(data: &[u8]) -> anyhow::Result<DecodedRecord> {
        let text = std::str::from_utf8(data).context("commit record is not valid UTF-8")?;
        let (header, body) = text
            .split_once('\n')
            .context("commit record has no body")?;
        let declared_oid = header
            .strip_prefix(RECORD_HEADER)
            .context("commit record does not start with a commit line")?;
        let declared_oid = ObjectId::try_parse(declared_oid.trim().to_string())?;

        let (commit, skipped) = if body.starts_with(LEGACY_PARENT_HEADER) {
            Self::parse_legacy_body(body)?
        } else {
            Self::parse_body(body)?
        };

        Ok(DecodedRecord {
            declared_oid,
            computed_oid: ObjectId::digest(body.as_bytes()),
            commit,
            skipped,
        })
    }

    fn parse_body(body: &str) -> anyhow::Result<(Commit, usize)> {
        let mut rest = body;
        let mut headers = Vec::new();

        loop {
            let (line, tail) = rest
                .split_once('\n')
                .context("commit header is not terminated by a blank line")?;
            rest = tail;

            if line.is_empty() {
                break;
            }

            let (key, value) = line
                .split_once(':')
                .with_context(|| format!("invalid commit header line: {line}"))?;
            headers.push((key, value.trim()));
        }

        let header = |name: &str| {
            headers
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .with_context(|| format!("commit header '{name}' is missing"))
        };

        let version = header("version")?
            .parse::<u32>()
            .context("commit version is not a number")?;
        if version != FORMAT_VERSION {
            anyhow::bail!("unsupported commit format version: {version}");
        }

        let parent = parse_parent(header("parent")?)?;
        let timestamp = DateTime::parse_from_rfc3339(header("date")?)
            .context("commit date is not an RFC 3339 timestamp")?;
        let message_len = header("message")?
            .parse::<usize>()
            .context("commit message length is not a number")?;

        let message = rest
            .get(..message_len)
            .context("commit message is truncated")?;
        let rest = rest[message_len..]
            .strip_prefix('\n')
            .context("commit message is not followed by the files section")?;

        let (files_line, listing) = rest.split_once('\n').unwrap_or((rest, ""));
        let expected = files_line
            .strip_prefix("files:")
            .context("commit files section is missing")?
            .trim()
            .parse::<usize>()
            .context("commit file count is not a number")?;

        let listing = Listing::parse(listing);
        let found = listing.entries.len() + listing.skipped;
        if found < expected {
            anyhow::bail!("commit files section is truncated: expected {expected} entries, found {found}");
        }

        Ok((
            Commit::new(parent, timestamp, message.to_string(), listing.entries),
            listing.skipped,
        ))
    }

    fn parse_legacy_body(body: &str) -> anyhow::Result<(Commit, usize)> {
        let (parent_line, rest) = body
            .split_once('\n')
            .context("legacy commit has no date line")?;
        let (date_line, rest) = rest
            .split_once('\n')
            .context("legacy commit has no message")?;

        let parent = parse_parent(
            parent_line
                .strip_prefix(LEGACY_PARENT_HEADER)
                .context("legacy commit parent line is malformed")?
                .trim(),
        )?;
        let timestamp = DateTime::parse_from_rfc3339(
            date_line
                .strip_prefix(LEGACY_DATE_HEADER)
                .context("legacy commit date line is malformed")?
                .trim(),
        )
        .context("legacy commit date is not an RFC 3339 timestamp")?;

        let rest = rest.strip_prefix('\n').unwrap_or(rest);
        let (message, listing) = match rest.find(LEGACY_FILES_ANCHOR) {
            Some(anchor) => (
                &rest[..anchor],
                Listing::parse(&rest[anchor + LEGACY_FILES_ANCHOR.len()..]),
            ),
            None => (rest, Listing::default()),
        };
        let message = message.strip_suffix("\n\n").unwrap_or(message.trim_end());

        Ok((
            Commit::new(parent, timestamp, message.to_string(), listing.entries),
            listing.skipped,
        ))
    }
}

fn parse_parent(value: &str) -> anyhow::Result<Option<ObjectId>> {
    if value.is_empty() {
        Ok(None)
    } else {
        ObjectId::try_parse(value.to_string()).map(Some)
    }
}

/// A commit read back from disk along with what is needed to verify it
#[derive(Debug, Clone)]
pub struct DecodedRecord {
    /// Id written on the record's first line
    pub declared_oid: ObjectId,
    /// Digest of the body as found on disk
    pub computed_oid: ObjectId,
    pub commit: Commit,
    /// Listing lines dropped by the lenient parser
    pub skipped: usize,
}

impl DecodedRecord {
    pub fn is_intact(&self) -> bool {
        self.declared_oid == self.computed_oid
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let parent = self
            .parent
            .as_ref()
            .map(|parent| format!(" {parent}"))
            .unwrap_or_default();

        let body = format!(
            "version: {FORMAT_VERSION}\nparent:{parent}\ndate: {}\nmessage: {}\n\n{}\nfiles: {}\n{}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.message.len(),
            self.message,
            self.files.len(),
            serialize_listing(&self.files),
        );

        Ok(Bytes::from(body))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}

impl Commit {
    /// Human-readable form printed by `cat-file -p`
    pub fn display(&self) -> String {
        let mut lines = vec![];

        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!(
            "date {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        lines.push(String::new());
        lines.push(self.message.to_string());
        lines.push(String::new());
        lines.push(serialize_listing(&self.files).trim_end().to_string());

        lines.join("\n")
    }
}
