//! Label the pull request described by the CI environment

use anyhow::Context;

use pr_size_labeler::adapters::github::{GitHubClient, api_base_url};
use pr_size_labeler::build_info::BuildInfo;
use pr_size_labeler::config::{LabelerConfig, config_path};
use pr_size_labeler::event::{RepoSlug, is_pull_request_event, parse_pr_number};
use pr_size_labeler::labeler::label_pull_request;
use pr_size_labeler::output::{LabelReport, OperationResult, OutputMode};

use crate::cli::LabelArgs;

fn required<'a>(value: Option<&'a str>, env: &str) -> anyhow::Result<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{env} is not set"))
}

fn skip(message: &str, mode: OutputMode) {
    log::info!("{message}");
    OperationResult {
        success: true,
        message: message.to_string(),
    }
    .render(mode);
}

/// Size the pull request and converge its labels
///
/// Non pull request events and malformed repository names are a no-op.
pub async fn label(args: &LabelArgs, build: &BuildInfo, mode: OutputMode) -> anyhow::Result<()> {
    let event_name = required(args.event_name.as_deref(), "GITHUB_EVENT_NAME")?;
    if !is_pull_request_event(event_name) {
        skip("Event is not a valid pull request event, doing nothing", mode);
        return Ok(());
    }

    let repository = required(args.repository.as_deref(), "GITHUB_REPOSITORY")?;
    let Some(repo) = RepoSlug::parse(repository) else {
        skip("Repository name is in the wrong format. Expected 'owner/repository'", mode);
        return Ok(());
    };

    let number = parse_pr_number(required(args.pr_number.as_deref(), "PULL_REQUEST_NUMBER")?)
        .context("parsing pull request number")?;

    let path = config_path(args.config_path.as_deref());
    let config = LabelerConfig::load(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;

    let token = required(args.token.as_deref(), "GITHUB_TOKEN")?;
    let pull_request = format!("{repo}#{number}");
    let client = GitHubClient::new(
        token,
        &api_base_url(args.enterprise_url.as_deref()),
        repo,
        number,
        &build.user_agent(),
    )
    .context("creating GitHub client")?;

    let outcome = label_pull_request(&client, &config, args.dry_run)
        .await
        .with_context(|| format!("labelling {pull_request}"))?;

    LabelReport::new(pull_request, &outcome.classification, outcome.plan, outcome.applied)
        .render(mode);
    Ok(())
}
