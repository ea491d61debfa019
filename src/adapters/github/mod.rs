//! GitHub adapter - implements `PullRequestHost` over the REST API
//!
//! Talks to `api.github.com` or a GitHub Enterprise Server instance.
//! Every request is scoped to a single pull request.

mod types;

use std::collections::BTreeSet;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use thiserror::Error;

use crate::core::models::ChangeRecord;
use crate::core::ports::PullRequestHost;
use crate::event::RepoSlug;

use types::{AddLabelsRequest, ApiErrorBody, PullRequest, PullRequestFile};

/// Public GitHub API endpoint
pub const GITHUB_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const PER_PAGE: usize = 100;
/// The files endpoint stops at 3000 entries
const MAX_FILE_PAGES: usize = 30;

/// Errors talking to GitHub
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport or decoding failure
    #[error("request to GitHub failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-success status
    #[error("GitHub returned {status} for {url}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
        /// Message from the error body, or the raw body
        message: String,
    },

    /// API base URL could not be used
    #[error("invalid GitHub API URL '{0}'")]
    InvalidBaseUrl(String),

    /// Token contains characters not allowed in a header
    #[error("invalid GitHub token: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
}

/// Resolve the API base URL, honouring a GitHub Enterprise Server URL
///
/// Enterprise URLs get `/api/v3` appended unless they already end with it.
#[must_use]
pub fn api_base_url(enterprise_url: Option<&str>) -> String {
    match enterprise_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => {
            let url = url.trim_end_matches('/');
            if url.ends_with("/api/v3") { url.to_string() } else { format!("{url}/api/v3") }
        },
        None => GITHUB_API_URL.to_string(),
    }
}

/// REST client for one pull request
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
    repo: RepoSlug,
    number: u64,
}

impl GitHubClient {
    /// Create a client authenticated with `token`
    pub fn new(
        token: &str,
        api_base: &str,
        repo: RepoSlug,
        number: u64,
        user_agent: &str,
    ) -> Result<Self, GitHubError> {
        let api_base =
            Url::parse(api_base).map_err(|_| GitHubError::InvalidBaseUrl(api_base.to_string()))?;
        if api_base.cannot_be_a_base() {
            return Err(GitHubError::InvalidBaseUrl(api_base.to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder().user_agent(user_agent).default_headers(headers).build()?;

        Ok(Self {
            http,
            api_base,
            repo,
            number,
        })
    }

    /// Build an endpoint URL from path segments, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn repo_endpoint(&self, resource: &str, rest: &[&str]) -> Url {
        let number = self.number.to_string();
        let mut segments = vec![
            "repos",
            self.repo.owner.as_str(),
            self.repo.name.as_str(),
            resource,
            number.as_str(),
        ];
        segments.extend_from_slice(rest);
        self.endpoint(&segments)
    }

    async fn files_page(&self, page: usize) -> Result<Vec<PullRequestFile>, GitHubError> {
        let mut url = self.repo_endpoint("pulls", &["files"]);
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("page", &page.to_string());

        let response = check_status(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch every changed file of the pull request
    pub async fn list_files(&self) -> Result<Vec<ChangeRecord>, GitHubError> {
        let mut records = Vec::new();
        for page in 1..=MAX_FILE_PAGES {
            let files = self.files_page(page).await?;
            let count = files.len();
            log::debug!("Fetched page {page} of changed files ({count} entries)");
            records.extend(files.into_iter().map(ChangeRecord::from));
            if count < PER_PAGE {
                break;
            }
        }
        Ok(records)
    }

    /// Fetch the names of the labels on the pull request
    pub async fn list_labels(&self) -> Result<BTreeSet<String>, GitHubError> {
        let url = self.repo_endpoint("pulls", &[]);
        let response = check_status(self.http.get(url).send().await?).await?;
        let pr: PullRequest = response.json().await?;
        Ok(pr.labels.into_iter().map(|label| label.name).collect())
    }

    /// Add labels to the pull request
    pub async fn post_labels(&self, labels: &[String]) -> Result<(), GitHubError> {
        let url = self.repo_endpoint("issues", &["labels"]);
        let body = AddLabelsRequest { labels };
        check_status(self.http.post(url).json(&body).send().await?).await?;
        Ok(())
    }

    /// Remove a label from the pull request; returns false if it was not there
    pub async fn delete_label(&self, label: &str) -> Result<bool, GitHubError> {
        let url = self.repo_endpoint("issues", &["labels", label]);
        let response = self.http.delete(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        check_status(response).await?;
        Ok(true)
    }
}

/// Turn a non-success response into a [`GitHubError::Status`]
async fn check_status(response: Response) -> Result<Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body).map_or(body, |b| b.message);
    Err(GitHubError::Status {
        status: status.as_u16(),
        url,
        message,
    })
}

impl PullRequestHost for GitHubClient {
    async fn changed_files(&self) -> anyhow::Result<Vec<ChangeRecord>> {
        Ok(self.list_files().await?)
    }

    async fn current_labels(&self) -> anyhow::Result<BTreeSet<String>> {
        Ok(self.list_labels().await?)
    }

    async fn add_labels(&self, labels: &[String]) -> anyhow::Result<()> {
        if labels.is_empty() {
            return Ok(());
        }
        Ok(self.post_labels(labels).await?)
    }

    async fn remove_label(&self, label: &str) -> anyhow::Result<()> {
        if !self.delete_label(label).await? {
            log::debug!("Label '{label}' was already removed");
        }
        Ok(())
    }
}
