//! Change record model
//!
//! A change record is one entry of a pull request's changed-file list,
//! as reported by the hosting platform.

use serde::{Deserialize, Serialize};

/// How a file was changed by the pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// File was created
    Added,
    /// File content was edited
    #[default]
    Modified,
    /// File was deleted
    Removed,
    /// File was moved (possibly with edits)
    Renamed,
    /// File was copied from another path
    Copied,
    /// File mode or metadata changed
    Changed,
    /// File is listed but carries no changes
    Unchanged,
    /// Status not known to this crate
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
            Self::Renamed => "renamed",
            Self::Copied => "copied",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A single changed file in a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Repository-relative path of the file
    pub path: String,

    /// How the file was changed
    pub status: FileStatus,

    /// Number of inserted lines
    pub additions: u64,

    /// Inserted plus deleted lines
    pub changes: u64,
}

impl ChangeRecord {
    /// Create a new change record
    #[must_use]
    pub fn new(path: impl Into<String>, status: FileStatus, additions: u64, changes: u64) -> Self {
        Self {
            path: path.into(),
            status,
            additions,
            changes,
        }
    }

    /// Number of lines this record contributes under the given accounting mode
    #[must_use]
    pub const fn counted_lines(&self, added_lines_only: bool) -> u64 {
        if added_lines_only { self.additions } else { self.changes }
    }
}
