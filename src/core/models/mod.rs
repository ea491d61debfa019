//! Domain models for pr-size-labeler
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ChangeRecord`] - One changed file of a pull request
//! - [`SizeTier`] - A named size category with thresholds and labels
//! - [`Dimension`] - Which count a threshold applies to
//! - [`Classification`] - Counts and resolved tiers for one run
//! - [`ReconciliationPlan`] - Labels to add and remove

mod change;
mod plan;
mod tier;

pub use change::{ChangeRecord, FileStatus};
pub use plan::{AggregatedCounts, Classification, ReconciliationPlan};
pub use tier::{Dimension, SizeTier};
