//! Commit metadata
//!
//! Each commit directory holds a `metadata` file next to the snapshot:
//!
//! ```text
//! ID: <id>
//! Date: <rfc3339 timestamp>
//! Message: <message, possibly spanning several lines>
//! ```
//!
//! The message is always the last field so that it can contain newlines.

use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Name of the metadata file inside each commit directory
pub const METADATA_FILE: &str = "metadata";

/// Environment variable overriding the commit timestamp (`%Y-%m-%d %H:%M:%S %z`)
pub const COMMIT_DATE_ENV: &str = "WIT_COMMIT_DATE";

const ID_FIELD: &str = "ID: ";
const DATE_FIELD: &str = "Date: ";
const MESSAGE_FIELD: &str = "Message: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    id: CommitId,
    message: String,
    timestamp: DateTime<FixedOffset>,
}

impl Commit {
    pub fn new(id: CommitId, message: String, timestamp: DateTime<FixedOffset>) -> Self {
        Commit {
            id,
            message,
            timestamp,
        }
    }

    /// Timestamp for a new commit, honoring `WIT_COMMIT_DATE`
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z")
                    .or_else(|_| DateTime::parse_from_rfc3339(&date_str))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    pub fn to_metadata(&self) -> String {
        format!(
            "{ID_FIELD}{}\n{DATE_FIELD}{}\n{MESSAGE_FIELD}{}\n",
            self.id,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.message
        )
    }

    /// Parse a metadata file. Returns `None` when a field is missing or malformed.
    pub fn from_metadata(content: &str) -> Option<Self> {
        let mut id = None;
        let mut timestamp = None;
        let mut lines = content.lines();

        for line in lines.by_ref() {
            if let Some(value) = line.strip_prefix(ID_FIELD) {
                id = CommitId::try_parse(value);
            } else if let Some(value) = line.strip_prefix(DATE_FIELD) {
                timestamp = DateTime::parse_from_rfc3339(value.trim()).ok();
            } else if let Some(first_line) = line.strip_prefix(MESSAGE_FIELD) {
                let message = std::iter::once(first_line)
                    .chain(lines)
                    .collect::<Vec<_>>()
                    .join("\n");

                return Some(Commit::new(id?, message, timestamp?));
            }
        }

        None
    }
}
