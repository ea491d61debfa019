//! Validate a configuration file

use pr_size_labeler::config::{LabelerConfig, config_path};
use pr_size_labeler::output::{ConfigReport, OutputMode};

/// Load and validate a configuration file, showing its tier table
pub fn check_config(path: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let path = config_path(path);
    let display = path.display().to_string();

    match LabelerConfig::load(&path) {
        Ok(config) => {
            ConfigReport {
                path: display,
                valid: true,
                error: None,
                tiers: config.label_configs,
                exclude_files: config.exclude_files,
                added_lines_only: config.added_lines_only,
            }
            .render(mode);
            Ok(())
        },
        Err(e) => {
            ConfigReport {
                path: display.clone(),
                valid: false,
                error: Some(e.to_string()),
                tiers: Vec::new(),
                exclude_files: Vec::new(),
                added_lines_only: false,
            }
            .render(mode);
            Err(anyhow::Error::new(e).context(format!("checking {display}")))
        },
    }
}
