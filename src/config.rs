//! Labeler configuration
//!
//! The configuration lives in the repository being labelled, by default at
//! `.github/pull-request-size.yml`. YAML is the native format; files with a
//! `.toml` extension are read as TOML with the same keys.
//!
//! ```yaml
//! exclude_files:
//!   - "*.lock"
//!   - "vendor/*"
//! added_lines_only: false
//! label_configs:
//!   - size: xs
//!     files: 1
//!     diff: 10
//!     labels: ["size/xs"]
//!   - size: s
//!     files: 10
//!     diff: 100
//!     labels: ["size/s"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Dimension, SizeTier};
use crate::core::services::{ExclusionSet, SizingPolicy};

/// Path used when no configuration file is given
pub const DEFAULT_CONFIG_PATH: &str = ".github/pull-request-size.yml";

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// YAML document could not be deserialized
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML document could not be deserialized
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Document parsed but describes an unusable tier table
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Sizing configuration for a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelerConfig {
    /// Glob patterns of files left out of the size
    #[serde(default)]
    pub exclude_files: Vec<String>,

    /// Ranked size tiers, smallest first
    #[serde(default)]
    pub label_configs: Vec<SizeTier>,

    /// Count only inserted lines and skip removed files
    #[serde(default)]
    pub added_lines_only: bool,
}

/// Resolve the configuration path, falling back to [`DEFAULT_CONFIG_PATH`]
#[must_use]
pub fn config_path(provided: Option<&str>) -> PathBuf {
    match provided {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

impl LabelerConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml { Self::from_toml(&content)? } else { Self::from_yaml(&content)? };

        config.validate()?;
        log::debug!(
            "Loaded {} tier(s) and {} exclude pattern(s) from {}",
            config.label_configs.len(),
            config.exclude_files.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a YAML document without validating it
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a TOML document without validating it
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Check the tier table is usable
    ///
    /// The table must be non-empty, every tier needs a unique name and at
    /// least one label, and thresholds may not decrease from one tier to
    /// the next in either dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.label_configs.is_empty() {
            return Err(ConfigError::Invalid("label_configs must contain at least one tier".into()));
        }

        let mut seen = HashSet::new();
        for tier in &self.label_configs {
            if tier.name.trim().is_empty() {
                return Err(ConfigError::Invalid("every tier needs a size name".into()));
            }
            if tier.labels.is_empty() {
                return Err(ConfigError::Invalid(format!("tier '{}' has no labels", tier.name)));
            }
            if !seen.insert(tier.name.as_str()) {
                return Err(ConfigError::Invalid(format!("tier '{}' is defined twice", tier.name)));
            }
        }

        for pair in self.label_configs.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            for dimension in [Dimension::Files, Dimension::Lines] {
                if upper.threshold(dimension) < lower.threshold(dimension) {
                    return Err(ConfigError::Invalid(format!(
                        "{dimension} threshold of tier '{}' ({}) is below that of '{}' ({})",
                        upper.name,
                        upper.threshold(dimension),
                        lower.name,
                        lower.threshold(dimension)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Sizing policy derived from this configuration
    #[must_use]
    pub fn policy(&self) -> SizingPolicy<'_> {
        SizingPolicy {
            tiers: &self.label_configs,
            exclusions: ExclusionSet::new(&self.exclude_files),
            added_lines_only: self.added_lines_only,
        }
    }
}
