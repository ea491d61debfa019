//! Pull request host port
//!
//! Defines the interface for reading and labelling a single pull request.

use std::collections::BTreeSet;

use crate::core::models::ChangeRecord;

/// Code-review platform access scoped to one pull request
///
/// Implementations handle transport, authentication and pagination.
pub trait PullRequestHost: Send + Sync {
    /// Every file changed by the pull request, across all pages
    fn changed_files(&self) -> impl Future<Output = anyhow::Result<Vec<ChangeRecord>>> + Send;

    /// Names of the labels currently on the pull request
    fn current_labels(&self) -> impl Future<Output = anyhow::Result<BTreeSet<String>>> + Send;

    /// Apply labels; labels already present are not an error
    fn add_labels(&self, labels: &[String]) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Take a label off; a label that is already gone is not an error
    fn remove_label(&self, label: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}
