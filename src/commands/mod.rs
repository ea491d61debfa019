//! Command implementations

mod check_config;
mod label;

pub use check_config::check_config;
pub use label::label;
