//! CLI definitions and entry point

use clap::{Args, Parser, Subcommand};

use crate::commands;
use pr_size_labeler::build_info::BuildInfo;
use pr_size_labeler::output::OutputMode;

/// pr-size-labeler - Label pull requests by size
#[derive(Parser, Debug)]
#[command(
    name = "pr-size-labeler",
    version,
    about = "Label pull requests by size",
    long_about = "Label pull requests by the size of their change-set.\n\n\
                  Counts changed files and lines, picks the matching size tier\n\
                  from .github/pull-request-size.yml and keeps the size labels in sync.\n\
                  Without a subcommand, labels the pull request described by the environment."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub label: LabelArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Inputs of a labelling run, usually supplied by the CI environment
#[derive(Args, Debug, Clone, Default)]
pub struct LabelArgs {
    /// Token used to call the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Pull request number
    #[arg(long, env = "PULL_REQUEST_NUMBER")]
    pub pr_number: Option<String>,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Configuration file (default: .github/pull-request-size.yml)
    #[arg(long = "config", env = "CONFIG_FILE_PATH")]
    pub config_path: Option<String>,

    /// GitHub Enterprise Server URL
    #[arg(long, env = "GITHUB_ENTERPRISE_URL")]
    pub enterprise_url: Option<String>,

    /// Compute the label changes without applying them
    #[arg(long)]
    pub dry_run: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a configuration file and show its tiers
    CheckConfig {
        /// Configuration file (default: --config, then .github/pull-request-size.yml)
        path: Option<String>,
    },

    /// Show version and build details
    Version,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let build = BuildInfo::current();
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::CheckConfig { path }) => {
            let path = path.or(cli.label.config_path);
            commands::check_config(path.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            build.render(output_mode);
            Ok(())
        },
        None => commands::label(&cli.label, &build, output_mode).await,
    }
}
