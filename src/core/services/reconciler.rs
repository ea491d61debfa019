//! Label reconciler service - computes the label delta for a pull request

use std::collections::BTreeSet;

use crate::core::models::{ReconciliationPlan, SizeTier};

/// Whether `label` belongs to any configured tier
#[must_use]
pub fn is_tier_label(tiers: &[SizeTier], label: &str) -> bool {
    tiers.iter().any(|tier| tier.has_label(label))
}

/// Compute the labels to add and remove so that the pull request carries
/// exactly `winner`'s labels among all tier-managed labels
///
/// Labels that belong to no tier are never touched.
#[must_use]
pub fn reconcile(
    tiers: &[SizeTier],
    winner: &SizeTier,
    current: &BTreeSet<String>,
) -> ReconciliationPlan {
    let to_remove = current
        .iter()
        .filter(|label| is_tier_label(tiers, label) && !winner.has_label(label))
        .cloned()
        .collect();

    let to_add = winner.labels.iter().filter(|label| !current.contains(*label)).cloned().collect();

    ReconciliationPlan { to_add, to_remove }
}
