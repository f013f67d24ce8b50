//! GitHub REST client for pull request files.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::GithubConfig;
use crate::constants;
use crate::models::ChangedFile;

use super::{FetchError, PullRequestFetcher};

/// Page size for the `pulls/{n}/files` endpoint (GitHub's maximum).
const PER_PAGE: usize = 100;

/// Hard cap on pages walked. GitHub lists at most 3000 files per PR,
/// so this is never the binding limit in practice.
const MAX_PAGES: u32 = 30;

/// Lightweight GitHub REST client.
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client from config. Unauthenticated access works for
    /// public repositories.
    pub fn new(config: &GithubConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(constants::USER_AGENT)
            .build()
            .map_err(|e| FetchError::Upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn files_url(&self, owner: &str, repo: &str, pr_number: u64, page: u32) -> String {
        format!(
            "{}/repos/{owner}/{repo}/pulls/{pr_number}/files?per_page={PER_PAGE}&page={page}",
            self.api_url
        )
    }

    async fn fetch_page(&self, url: &str) -> Result<Vec<ChangedFile>, FetchError> {
        let mut request = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(ref token) = self.token {
            request = request
                .bearer_auth(token)
                .header("X-GitHub-Api-Version", "2022-11-28");
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Upstream(format!("request failed: {e}")))?;

        if let Some(err) = map_error_status(response.status()) {
            return Err(err);
        }

        response
            .json::<Vec<ChangedFile>>()
            .await
            .map_err(|e| FetchError::Upstream(format!("invalid response body: {e}")))
    }
}

/// Map a non-success HTTP status onto a fetch error kind.
fn map_error_status(status: StatusCode) -> Option<FetchError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::NOT_FOUND => FetchError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            FetchError::Auth(format!("GitHub returned {status}"))
        }
        other => FetchError::Upstream(format!("GitHub returned {other}")),
    })
}

#[async_trait]
impl PullRequestFetcher for GitHubClient {
    async fn fetch_pr_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<Vec<ChangedFile>, FetchError> {
        let mut files = Vec::new();

        for page in 1..=MAX_PAGES {
            let url = self.files_url(owner, repo, pr_number, page);
            tracing::debug!(%url, "fetching pull request files page");

            let batch = self.fetch_page(&url).await?;
            let last_page = batch.len() < PER_PAGE;
            files.extend(batch);

            if last_page {
                break;
            }
        }

        tracing::debug!(count = files.len(), "fetched changed files");
        Ok(files)
    }
}
