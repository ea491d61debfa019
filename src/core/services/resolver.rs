//! Tier resolver service - maps counts onto the ranked tier table
//!
//! Rank is position in the configured list: index 0 is the smallest tier,
//! the last index the largest. Threshold magnitudes play no part in rank.

use crate::core::error::SizingError;
use crate::core::models::{Dimension, SizeTier};

/// Find the tier a count falls into for one dimension
///
/// Returns the first tier, in configured order, whose threshold for
/// `dimension` is `>= count`. Counts above every threshold saturate at
/// the last tier.
pub fn resolve_tier(
    tiers: &[SizeTier],
    count: u64,
    dimension: Dimension,
) -> Result<&SizeTier, SizingError> {
    let last = tiers.last().ok_or(SizingError::EmptyTierList)?;
    Ok(tiers.iter().find(|tier| count <= tier.threshold(dimension)).unwrap_or(last))
}

/// Position of the tier called `name` in the configured list
#[must_use]
pub fn tier_rank(tiers: &[SizeTier], name: &str) -> Option<usize> {
    tiers.iter().position(|tier| tier.name == name)
}

/// Pick the higher-ranked of the file-count and line-count tiers
///
/// Ties go to `by_files`. Both tiers must belong to `tiers`.
pub fn pick_winner<'a>(
    tiers: &[SizeTier],
    by_files: &'a SizeTier,
    by_lines: &'a SizeTier,
) -> Result<&'a SizeTier, SizingError> {
    let rank = |tier: &SizeTier| {
        tier_rank(tiers, &tier.name).ok_or_else(|| SizingError::UnknownTier(tier.name.clone()))
    };

    if rank(by_files)? >= rank(by_lines)? { Ok(by_files) } else { Ok(by_lines) }
}
