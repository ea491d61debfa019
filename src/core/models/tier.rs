//! Size tier model
//!
//! A tier is one row of the configured size table: a name, an inclusive
//! upper bound per dimension, and the labels that mark a pull request of
//! that size. Rank is the tier's position in the configured list.

use serde::{Deserialize, Serialize};

/// The quantity a tier threshold is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Number of counted files
    Files,
    /// Number of counted changed lines
    Lines,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Files => write!(f, "files"),
            Self::Lines => write!(f, "lines"),
        }
    }
}

/// A named size category
///
/// Field names on the wire follow the `label_configs` entries of
/// `.github/pull-request-size.yml`: `size`, `files`, `diff`, `labels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTier {
    /// Tier identifier (e.g. "xs")
    #[serde(rename = "size")]
    pub name: String,

    /// Inclusive upper bound on counted files
    #[serde(rename = "files")]
    pub file_threshold: u64,

    /// Inclusive upper bound on counted changed lines
    #[serde(rename = "diff")]
    pub line_threshold: u64,

    /// Labels applied when this tier wins
    pub labels: Vec<String>,
}

impl SizeTier {
    /// Create a new tier
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        file_threshold: u64,
        line_threshold: u64,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            file_threshold,
            line_threshold,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Threshold for the requested dimension
    #[must_use]
    pub const fn threshold(&self, dimension: Dimension) -> u64 {
        match dimension {
            Dimension::Files => self.file_threshold,
            Dimension::Lines => self.line_threshold,
        }
    }

    /// Whether `label` belongs to this tier
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}
