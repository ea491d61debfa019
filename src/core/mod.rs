//! Core domain logic for pr-size-labeler
//!
//! This module contains pure sizing logic with no I/O dependencies.
//! Platform interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ChangeRecord, SizeTier, ReconciliationPlan)
//! - `services/` - Matching, aggregation, tier resolution, reconciliation
//! - `ports/` - Trait definitions for external dependencies

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::SizingError;
