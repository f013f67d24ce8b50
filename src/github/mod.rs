//! Pull request diff fetching.
//!
//! The pipeline depends on the [`PullRequestFetcher`] trait so that
//! tests and alternative hosts can substitute the GitHub client.

pub mod client;

pub use client::GitHubClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ChangedFile;

/// Errors surfaced by a fetcher. The pipeline performs no retries;
/// each of these is terminal for the request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("pull request or repository not found")]
    NotFound,

    #[error("authentication with the hosting API failed: {0}")]
    Auth(String),

    #[error("hosting API failure: {0}")]
    Upstream(String),
}

/// Fetches the changed files of one pull request, in the order the
/// hosting API returns them.
#[async_trait]
pub trait PullRequestFetcher: Send + Sync {
    async fn fetch_pr_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<Vec<ChangedFile>, FetchError>;
}
