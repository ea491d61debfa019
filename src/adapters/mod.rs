//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - GitHub REST API access for a pull request

pub mod github;

pub use github::{GitHubClient, GitHubError};
