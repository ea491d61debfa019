//! Tests for end-to-end classification and reconciliation

use pr_size_labeler::core::SizingError;
use pr_size_labeler::core::models::{ChangeRecord, Dimension, FileStatus, SizeTier};
use pr_size_labeler::core::services::{
    ExclusionSet, aggregate, classify, pick_winner, reconcile, resolve_tier,
};

use crate::common::{labels, modified, standard_config, standard_tiers};

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[test]
fn test_no_files_is_smallest_tier() {
    let config = standard_config();
    let result = classify(&[], &config.policy()).unwrap();
    assert_eq!(result.counts.files, 0);
    assert_eq!(result.winner.name, "xs");
}

#[test]
fn test_small_change_set() {
    let config = standard_config();
    let changes = vec![modified("file1.go", 5), modified("file2.go", 10)];
    let result = classify(&changes, &config.policy()).unwrap();
    assert_eq!(result.by_files.name, "s");
    assert_eq!(result.by_lines.name, "s");
    assert_eq!(result.winner.name, "s");
}

#[test]
fn test_lines_push_size_up() {
    let config = standard_config();
    let changes = vec![modified("file1.go", 30), modified("file2.go", 70)];
    let result = classify(&changes, &config.policy()).unwrap();
    assert_eq!(result.by_files.name, "s");
    assert_eq!(result.by_lines.name, "m");
    assert_eq!(result.winner.name, "m");
}

#[test]
fn test_excluded_file_is_ignored() {
    let config = standard_config();
    let changes = vec![modified("exclude.txt", 100), modified("file2.go", 20)];
    let result = classify(&changes, &config.policy()).unwrap();
    assert_eq!(result.counts.files, 1);
    assert_eq!(result.counts.lines, 20);
    assert_eq!(result.by_files.name, "xs");
    assert_eq!(result.by_lines.name, "s");
    assert_eq!(result.winner.name, "s");
}

#[test]
fn test_added_lines_only_ignores_deletions() {
    let mut config = standard_config();
    config.added_lines_only = true;
    let changes = vec![
        ChangeRecord::new("big_delete.rs", FileStatus::Removed, 0, 5000),
        ChangeRecord::new("edit.rs", FileStatus::Modified, 4, 900),
    ];
    let result = classify(&changes, &config.policy()).unwrap();
    assert_eq!(result.counts.files, 1);
    assert_eq!(result.counts.lines, 4);
    assert_eq!(result.winner.name, "xs");
}

// =============================================================================
// DOCUMENTED SCENARIOS
// =============================================================================

#[test]
fn test_zero_files_resolve_to_first_tier() {
    let tiers = vec![SizeTier::new("xs", 10, 1, ["size/xs"]), SizeTier::new("s", 50, 10, ["size/s"])];
    assert_eq!(resolve_tier(&tiers, 0, Dimension::Files).unwrap().name, "xs");
}

#[test]
fn test_excluded_file_contributes_to_neither_count() {
    let counts = aggregate(&[modified("exclude.txt", 100)], &ExclusionSet::new(&["exclude.*"]), false);
    assert_eq!(counts.files, 0);
    assert_eq!(counts.lines, 0);
}

#[test]
fn test_removed_file_skipped_when_counting_added_lines() {
    let removed = ChangeRecord::new("gone.rs", FileStatus::Removed, 12, 340);
    let counts = aggregate(&[removed], &ExclusionSet::default(), true);
    assert_eq!(counts.files, 0);
    assert_eq!(counts.lines, 0);
}

#[test]
fn test_later_tier_wins_tie_break() {
    let tiers = standard_tiers();
    assert_eq!(pick_winner(&tiers, &tiers[1], &tiers[2]).unwrap().name, "m");
}

#[test]
fn test_reconcile_swaps_size_label_only() {
    let tiers = standard_tiers()[..4].to_vec();
    let plan = reconcile(&tiers, &tiers[3], &labels(&["size/m", "bug"]));
    assert_eq!(plan.to_remove, labels(&["size/m"]));
    assert_eq!(plan.to_add, labels(&["size/l"]));
}

#[test]
fn test_reconcile_converges() {
    let tiers = standard_tiers();
    let current = labels(&["size/xs", "size/m", "bug"]);
    let plan = reconcile(&tiers, &tiers[2], &current);
    let after = plan.apply_to(&current);
    assert_eq!(after, labels(&["size/m", "bug"]));
    assert!(reconcile(&tiers, &tiers[2], &after).is_empty());
}

#[test]
fn test_empty_tiers_are_rejected() {
    assert_eq!(resolve_tier(&[], 3, Dimension::Lines), Err(SizingError::EmptyTierList));
}
