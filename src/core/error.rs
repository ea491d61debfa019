//! Errors raised by the sizing logic

use thiserror::Error;

/// Errors that can occur while classifying a change-set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizingError {
    /// No tiers were configured
    #[error("no size tiers configured")]
    EmptyTierList,

    /// A tier was referenced that is not part of the configured list
    #[error("tier '{0}' is not part of the configured tiers")]
    UnknownTier(String),
}
