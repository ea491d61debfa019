//! Business logic services
//!
//! Pure logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Decide which changed files are excluded
//! - [`aggregator`] - Count files and lines of a change-set
//! - [`resolver`] - Map counts to tiers and break ties
//! - [`reconciler`] - Compute label additions and removals
//! - [`classifier`] - Chain the above into one classification

pub mod aggregator;
pub mod classifier;
pub mod matcher;
pub mod reconciler;
pub mod resolver;

pub use aggregator::aggregate;
pub use classifier::{SizingPolicy, classify};
pub use matcher::{ExclusionSet, is_excluded};
pub use reconciler::{is_tier_label, reconcile};
pub use resolver::{pick_winner, resolve_tier, tier_rank};
