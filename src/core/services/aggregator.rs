//! Aggregator service - turns a change-set into file and line counts

use crate::core::models::{AggregatedCounts, ChangeRecord, FileStatus};

use super::matcher::ExclusionSet;

/// Count the files and lines of a change-set that contribute to its size
///
/// A record is skipped entirely when it is excluded, or when
/// `added_lines_only` is set and the file was removed. Every other record
/// adds one file and either its additions (`added_lines_only`) or its
/// total changes. The result does not depend on the order of `changes`.
#[must_use]
pub fn aggregate(
    changes: &[ChangeRecord],
    exclusions: &ExclusionSet,
    added_lines_only: bool,
) -> AggregatedCounts {
    changes
        .iter()
        .filter(|change| !(added_lines_only && change.status == FileStatus::Removed))
        .filter(|change| {
            let excluded = exclusions.is_excluded(&change.path);
            if excluded {
                log::debug!("Excluding {} file {} from size", change.status, change.path);
            }
            !excluded
        })
        .fold(AggregatedCounts::default(), |mut counts, change| {
            counts.files += 1;
            counts.lines = counts.lines.saturating_add(change.counted_lines(added_lines_only));
            counts
        })
}
