//! Per-run results: aggregated counts, classification and label plan
//!
//! None of these outlive a single invocation.

use std::collections::BTreeSet;

use serde::Serialize;

use super::SizeTier;

/// Counted files and lines after exclusions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AggregatedCounts {
    /// Files that contribute to the size
    pub files: u64,
    /// Changed lines that contribute to the size
    pub lines: u64,
}

/// Outcome of sizing a change-set against the tier table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Counts the tiers were resolved from
    pub counts: AggregatedCounts,
    /// Tier resolved from the file count
    pub by_files: SizeTier,
    /// Tier resolved from the line count
    pub by_lines: SizeTier,
    /// Higher-ranked of the two
    pub winner: SizeTier,
}

/// Label changes needed to converge a pull request onto a tier
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReconciliationPlan {
    /// Labels to apply
    pub to_add: BTreeSet<String>,
    /// Tier-managed labels to take off
    pub to_remove: BTreeSet<String>,
}

impl ReconciliationPlan {
    /// True when the pull request already carries exactly the right size labels
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Labels the pull request will carry once the plan is applied
    #[must_use]
    pub fn apply_to(&self, current: &BTreeSet<String>) -> BTreeSet<String> {
        current
            .iter()
            .filter(|label| !self.to_remove.contains(*label))
            .chain(self.to_add.iter())
            .cloned()
            .collect()
    }
}
