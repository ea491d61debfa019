//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{AggregatedCounts, Classification, ReconciliationPlan, SizeTier};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of labelling a pull request
#[derive(Debug, Serialize)]
pub struct LabelReport {
    /// Pull request reference (`owner/repo#number`)
    pub pull_request: String,
    /// Counted files and lines
    pub counts: AggregatedCounts,
    /// Tier name resolved from the file count
    pub size_by_files: String,
    /// Tier name resolved from the line count
    pub size_by_lines: String,
    /// Winning tier name
    pub size: String,
    /// Labels of the winning tier
    pub labels: Vec<String>,
    /// Label changes computed for the pull request
    pub plan: ReconciliationPlan,
    /// Whether the plan was sent to the platform
    pub applied: bool,
}

impl LabelReport {
    /// Build a report from a classification and its plan
    #[must_use]
    pub fn new(
        pull_request: String,
        classification: &Classification,
        plan: ReconciliationPlan,
        applied: bool,
    ) -> Self {
        Self {
            pull_request,
            counts: classification.counts,
            size_by_files: classification.by_files.name.clone(),
            size_by_lines: classification.by_lines.name.clone(),
            size: classification.winner.name.clone(),
            labels: classification.winner.labels.clone(),
            plan,
            applied,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!(
            "{}: {} file(s), {} line(s)",
            self.pull_request, self.counts.files, self.counts.lines
        );
        println!("  by files: {}  by lines: {}", self.size_by_files, self.size_by_lines);
        println!("  size: {} ({})\n", self.size.bold(), self.labels.join(", "));

        if self.plan.is_empty() {
            println!("Size labels already up to date.");
            return;
        }

        for label in &self.plan.to_remove {
            println!("  {} {label}", "-".red());
        }
        for label in &self.plan.to_add {
            println!("  {} {label}", "+".green());
        }

        if !self.applied {
            println!("\nDry run: no labels were changed.");
        }
    }
}

/// Result of validating a configuration file
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// File that was checked
    pub path: String,
    /// Whether the file is usable
    pub valid: bool,
    /// Validation error, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Configured tiers, smallest first
    pub tiers: Vec<SizeTier>,
    /// Exclusion patterns
    pub exclude_files: Vec<String>,
    /// Whether only added lines are counted
    pub added_lines_only: bool,
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(error) = &self.error {
            println!("{} {}: {error}", "Invalid".red(), self.path);
            return;
        }

        println!("{} {}\n", "Valid".green(), self.path);
        println!("  {:<8} {:>8} {:>8}  labels", "size", "files", "lines");
        for tier in &self.tiers {
            println!(
                "  {:<8} {:>8} {:>8}  {}",
                tier.name,
                tier.file_threshold,
                tier.line_threshold,
                tier.labels.join(", ")
            );
        }

        if !self.exclude_files.is_empty() {
            println!("\n  excluded: {}", self.exclude_files.join(", "));
        }
        if self.added_lines_only {
            println!("  counting added lines only");
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
