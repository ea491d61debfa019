//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the sizing logic and the
//! code-review platform. Implementations live in the `adapters` module.

mod pull_request_host;

pub use pull_request_host::PullRequestHost;
