//! Tests for loading configuration files

use std::fs;

use pr_size_labeler::config::{ConfigError, LabelerConfig};
use tempfile::TempDir;

const VALID_YAML: &str = r#"
exclude_files:
  - "*.lock"
  - "docs/*"
label_configs:
  - size: xs
    files: 1
    diff: 10
    labels: ["size/xs"]
  - size: s
    files: 10
    diff: 100
    labels: ["size/s"]
  - size: l
    files: 100
    diff: 1000
    labels: ["size/l", "needs-second-review"]
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "pull-request-size.yml", VALID_YAML);

    let config = LabelerConfig::load(&path).unwrap();
    assert_eq!(config.label_configs.len(), 3);
    assert_eq!(config.label_configs[2].labels, vec!["size/l", "needs-second-review"]);
    assert_eq!(config.exclude_files, vec!["*.lock", "docs/*"]);
    assert!(!config.added_lines_only);
}

#[test]
fn test_load_toml() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "size.toml",
        r#"
added_lines_only = true

[[label_configs]]
size = "small"
files = 5
diff = 50
labels = ["small"]

[[label_configs]]
size = "large"
files = 50
diff = 500
labels = ["large"]
"#,
    );

    let config = LabelerConfig::load(&path).unwrap();
    assert!(config.added_lines_only);
    assert_eq!(config.label_configs[1].name, "large");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = LabelerConfig::load(&dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_unparseable_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.yml", "label_configs: [unterminated");
    assert!(matches!(LabelerConfig::load(&path), Err(ConfigError::Yaml(_))));
}

#[test]
fn test_negative_threshold_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "negative.yml",
        "label_configs:\n  - size: xs\n    files: -1\n    diff: 10\n    labels: [\"size/xs\"]\n",
    );
    let err = LabelerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
    assert!(err.to_string().contains("-1"));
}

#[test]
fn test_wrong_type_in_toml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.toml", "added_lines_only = \"yes\"");
    assert!(matches!(LabelerConfig::load(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn test_document_without_tiers_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.yml", "exclude_files: []\n");
    let err = LabelerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("at least one tier"));
}

#[test]
fn test_misordered_tiers_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "misordered.yml",
        r#"
label_configs:
  - size: l
    files: 100
    diff: 1000
    labels: ["size/l"]
  - size: s
    files: 10
    diff: 100
    labels: ["size/s"]
"#,
    );
    let err = LabelerConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("tier 's'"));
}
