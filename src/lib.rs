//! pr-size-labeler - label pull requests by the size of their change-set
//!
//! This library provides the sizing and label reconciliation logic, the
//! configuration format, and a GitHub adapter for applying size labels.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod build_info;
pub mod config;
pub mod core;
pub mod event;
pub mod labeler;
pub mod output;
