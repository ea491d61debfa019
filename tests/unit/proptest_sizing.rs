//! Property-based tests for the sizing services
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::BTreeSet;

use pr_size_labeler::core::models::{ChangeRecord, Dimension, FileStatus, SizeTier};
use pr_size_labeler::core::services::{ExclusionSet, aggregate, pick_winner, reconcile, resolve_tier};
use proptest::prelude::*;

fn status() -> impl Strategy<Value = FileStatus> {
    prop_oneof![
        Just(FileStatus::Added),
        Just(FileStatus::Modified),
        Just(FileStatus::Removed),
        Just(FileStatus::Renamed),
    ]
}

fn change() -> impl Strategy<Value = ChangeRecord> {
    ("[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.(rs|md|lock)", status(), 0u64..500, 0u64..500).prop_map(
        |(path, status, additions, deletions)| {
            ChangeRecord::new(path, status, additions, additions + deletions)
        },
    )
}

/// Ascending tier table with `size/<i>` labels
fn tiers() -> impl Strategy<Value = Vec<SizeTier>> {
    prop::collection::vec((0u64..50, 0u64..500), 1..6).prop_map(|steps| {
        let (mut files, mut lines) = (0, 0);
        steps
            .into_iter()
            .enumerate()
            .map(|(i, (df, dl))| {
                files += df;
                lines += dl;
                SizeTier::new(format!("t{i}"), files, lines, [format!("size/{i}")])
            })
            .collect()
    })
}

proptest! {
    /// Aggregation does not depend on the order of the change-set
    #[test]
    fn aggregate_is_order_independent(
        changes in prop::collection::vec(change(), 0..20),
        added_lines_only in any::<bool>(),
    ) {
        let exclusions = ExclusionSet::new(&["*.lock", "docs/*"]);
        let mut reversed = changes.clone();
        reversed.reverse();
        let mut rotated = changes.clone();
        if !rotated.is_empty() {
            rotated.rotate_left(changes.len() / 2);
        }

        let expected = aggregate(&changes, &exclusions, added_lines_only);
        prop_assert_eq!(aggregate(&reversed, &exclusions, added_lines_only), expected);
        prop_assert_eq!(aggregate(&rotated, &exclusions, added_lines_only), expected);
    }

    /// The resolved tier is the first whose threshold covers the count, or the last
    #[test]
    fn resolve_picks_first_covering_tier(tiers in tiers(), count in 0u64..400) {
        let resolved = resolve_tier(&tiers, count, Dimension::Files).unwrap();
        let expected = tiers
            .iter()
            .position(|t| t.file_threshold >= count)
            .unwrap_or(tiers.len() - 1);
        prop_assert_eq!(resolved, &tiers[expected]);
    }

    /// The winner is the tier at the larger position, files winning ties
    #[test]
    fn winner_is_higher_ranked(tiers in tiers(), a in 0usize..6, b in 0usize..6) {
        let (a, b) = (a % tiers.len(), b % tiers.len());
        let winner = pick_winner(&tiers, &tiers[a], &tiers[b]).unwrap();
        prop_assert_eq!(winner, &tiers[a.max(b)]);
    }

    /// Applying a plan converges: reconciling again yields an empty plan
    #[test]
    fn reconcile_is_idempotent(
        tiers in tiers(),
        pick in 0usize..6,
        existing in prop::collection::btree_set("size/[0-5]|bug|docs", 0..6),
    ) {
        let winner = &tiers[pick % tiers.len()];
        let plan = reconcile(&tiers, winner, &existing);
        let after = plan.apply_to(&existing);

        prop_assert!(reconcile(&tiers, winner, &after).is_empty());
        let winner_labels: BTreeSet<String> = winner.labels.iter().cloned().collect();
        prop_assert!(winner_labels.is_subset(&after));
        prop_assert_eq!(after.contains("bug"), existing.contains("bug"));
    }
}
