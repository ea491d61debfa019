//! Size labelling of a single pull request
//!
//! Fetches the change-set and current labels through a [`PullRequestHost`],
//! sizes the change-set and converges the size labels onto the winning tier.

use std::collections::BTreeSet;

use anyhow::Context;

use crate::config::LabelerConfig;
use crate::core::models::{Classification, ReconciliationPlan};
use crate::core::ports::PullRequestHost;
use crate::core::services::{classify, reconcile};

/// What a labelling run found and did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOutcome {
    /// Counts and resolved tiers
    pub classification: Classification,
    /// Labels on the pull request before the run
    pub current_labels: BTreeSet<String>,
    /// Label changes computed for the pull request
    pub plan: ReconciliationPlan,
    /// Whether the plan was sent to the host
    pub applied: bool,
}

/// Size a pull request and converge its size labels
///
/// Stale size labels are removed before the winning tier's labels are
/// added. With `dry_run` the plan is computed but nothing is changed.
pub async fn label_pull_request<H: PullRequestHost>(
    host: &H,
    config: &LabelerConfig,
    dry_run: bool,
) -> anyhow::Result<LabelOutcome> {
    let files = host.changed_files().await.context("fetching pull request files")?;
    log::info!("Pull request changes {} file(s)", files.len());

    let classification = classify(&files, &config.policy()).context("classifying pull request")?;
    log::info!(
        "Size '{}' ({} file(s), {} line(s))",
        classification.winner.name,
        classification.counts.files,
        classification.counts.lines
    );

    let current_labels = host.current_labels().await.context("fetching pull request labels")?;
    let plan = reconcile(&config.label_configs, &classification.winner, &current_labels);

    if plan.is_empty() {
        log::info!("Size labels already up to date");
    } else if dry_run {
        log::info!("Dry run, leaving labels unchanged");
    } else {
        apply_plan(host, &classification, &plan).await?;
    }

    Ok(LabelOutcome {
        classification,
        current_labels,
        applied: !dry_run && !plan.is_empty(),
        plan,
    })
}

async fn apply_plan<H: PullRequestHost>(
    host: &H,
    classification: &Classification,
    plan: &ReconciliationPlan,
) -> anyhow::Result<()> {
    for label in &plan.to_remove {
        log::info!("Removing label '{label}'");
        host.remove_label(label)
            .await
            .with_context(|| format!("removing label '{label}'"))?;
    }

    // Keep the tier's configured label order
    let to_add: Vec<String> = classification
        .winner
        .labels
        .iter()
        .filter(|label| plan.to_add.contains(*label))
        .cloned()
        .collect();
    if !to_add.is_empty() {
        log::info!("Adding label(s) {}", to_add.join(", "));
        host.add_labels(&to_add).await.context("adding size labels")?;
    }
    Ok(())
}
