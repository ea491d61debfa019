//! GitHub REST API wire types

use serde::{Deserialize, Serialize};

use crate::core::models::{ChangeRecord, FileStatus};

/// Entry of `GET /repos/{owner}/{repo}/pulls/{number}/files`
#[derive(Debug, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub changes: u64,
}

impl From<PullRequestFile> for ChangeRecord {
    fn from(file: PullRequestFile) -> Self {
        Self::new(file.filename, file.status, file.additions, file.changes)
    }
}

/// The subset of `GET /repos/{owner}/{repo}/pulls/{number}` we read
#[derive(Debug, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// A label attached to an issue or pull request
#[derive(Debug, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Body of `POST /repos/{owner}/{repo}/issues/{number}/labels`
#[derive(Debug, Serialize)]
pub struct AddLabelsRequest<'a> {
    pub labels: &'a [String],
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
