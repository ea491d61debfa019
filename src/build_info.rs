//! Build and process metadata
//!
//! Captured once at startup and handed to whatever needs to report it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::output::OutputMode;

/// Version details of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    /// Package version
    pub version: &'static str,
    /// Source revision, when provided at build time
    pub revision: Option<&'static str>,
    /// When this process started
    pub started_at: DateTime<Utc>,
}

impl BuildInfo {
    /// Build info for the current binary, stamped with the current time
    #[must_use]
    pub fn current() -> Self {
        Self {
            version: crate::VERSION,
            revision: option_env!("PR_SIZE_LABELER_REVISION"),
            started_at: Utc::now(),
        }
    }

    /// `User-Agent` header value for API requests
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("pr-size-labeler/{}", self.version)
    }

    /// Render build info based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("pr-size-labeler\n{self}"),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Version: {} {}", self.revision.unwrap_or("unknown"), self.version)?;
        write!(f, "Started: {}", self.started_at.format("%Y-%m-%d"))
    }
}
