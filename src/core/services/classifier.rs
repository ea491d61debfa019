//! Classifier service - sizes a change-set end to end
//!
//! Chains aggregation, per-dimension tier resolution and the tie-break.

use crate::core::error::SizingError;
use crate::core::models::{ChangeRecord, Classification, Dimension, SizeTier};

use super::aggregator::aggregate;
use super::matcher::ExclusionSet;
use super::resolver::{pick_winner, resolve_tier};

/// Sizing policy for a run
#[derive(Debug, Clone)]
pub struct SizingPolicy<'a> {
    /// Ranked tier table
    pub tiers: &'a [SizeTier],
    /// Compiled exclusion patterns
    pub exclusions: ExclusionSet,
    /// Count only inserted lines and skip removed files
    pub added_lines_only: bool,
}

/// Classify a change-set into a winning tier
pub fn classify(
    changes: &[ChangeRecord],
    policy: &SizingPolicy<'_>,
) -> Result<Classification, SizingError> {
    let counts = aggregate(changes, &policy.exclusions, policy.added_lines_only);
    let by_files = resolve_tier(policy.tiers, counts.files, Dimension::Files)?;
    let by_lines = resolve_tier(policy.tiers, counts.lines, Dimension::Lines)?;
    let winner = pick_winner(policy.tiers, by_files, by_lines)?;

    log::debug!(
        "{} file(s) -> '{}', {} line(s) -> '{}', winner '{}'",
        counts.files,
        by_files.name,
        counts.lines,
        by_lines.name,
        winner.name
    );

    Ok(Classification {
        counts,
        by_files: by_files.clone(),
        by_lines: by_lines.clone(),
        winner: winner.clone(),
    })
}
