//! Triggering event and repository validation
//!
//! The labeler only acts on pull request events for a well-formed
//! `owner/repository` slug. Anything else is a silent no-op.

use std::fmt;

/// Events that carry a pull request to label
const PULL_REQUEST_EVENTS: [&str; 2] = ["pull_request", "pull_request_target"];

/// Check if the event name is a pull request event (case-insensitive)
#[must_use]
pub fn is_pull_request_event(event_name: &str) -> bool {
    PULL_REQUEST_EVENTS.iter().any(|e| e.eq_ignore_ascii_case(event_name))
}

/// A repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Account or organisation owning the repository
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoSlug {
    /// Parse an `owner/repository` string
    ///
    /// Returns `None` unless there are exactly two non-empty parts.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Some(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            },
            _ => None,
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse a pull request number
pub fn parse_pr_number(s: &str) -> anyhow::Result<u64> {
    let number: u64 = s
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid pull request number '{s}': {e}"))?;
    if number == 0 {
        anyhow::bail!("invalid pull request number '{s}': must be positive");
    }
    Ok(number)
}
