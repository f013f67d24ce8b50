//! Review pipeline: validate → fetch → evaluate → score → assemble.

pub mod evaluator;
pub mod report;
pub mod score;

use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;

use crate::config::RulesConfig;
use crate::github::{FetchError, PullRequestFetcher};
use crate::models::{ChangedFile, Issue, Report, ReviewRequest};
use crate::providers::Summarizer;
use crate::rules::RuleSet;

use report::AssembleOptions;

/// Caller-visible failure kinds of one review request.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("pull request or repository not found")]
    NotFound,

    #[error("authentication with the hosting API failed: {0}")]
    Auth(String),

    #[error("hosting API failure: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<FetchError> for ReviewError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound => ReviewError::NotFound,
            FetchError::Auth(msg) => ReviewError::Auth(msg),
            FetchError::Upstream(msg) => ReviewError::Upstream(msg),
        }
    }
}

impl ReviewError {
    /// Stable machine-readable kind, used in error response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ReviewError::Validation(_) => "validation_error",
            ReviewError::NotFound => "not_found",
            ReviewError::Auth(_) => "auth_error",
            ReviewError::Upstream(_) => "upstream_error",
            ReviewError::Internal(_) => "internal_error",
        }
    }
}

/// The analysis pipeline. Holds the rule set and the optional
/// summarizer; all request state is local to [`ReviewEngine::review`].
pub struct ReviewEngine {
    rules: RuleSet,
    summarizer: Option<Arc<dyn Summarizer>>,
}

impl ReviewEngine {
    pub fn new(rules_config: &RulesConfig, summarizer: Option<Arc<dyn Summarizer>>) -> Self {
        Self {
            rules: RuleSet::standard(rules_config),
            summarizer,
        }
    }

    /// Review one pull request end to end.
    pub async fn review(
        &self,
        fetcher: &dyn PullRequestFetcher,
        request: &ReviewRequest,
    ) -> Result<Report, ReviewError> {
        request.validate().map_err(ReviewError::Validation)?;

        let files = fetcher
            .fetch_pr_files(&request.repo_owner, &request.repo_name, request.pr_number)
            .await?;

        let issues = self.evaluate_all(&files);

        let opts = AssembleOptions {
            natural_language: request.wants_summary(),
            inline_comments: request.wants_inline_comments(),
            query: request.query.clone(),
        };

        Ok(report::assemble(issues, &opts, self.summarizer.as_deref()).await)
    }

    /// Evaluate all files and flatten their issues.
    ///
    /// Files are evaluated in parallel; the order-preserving collect
    /// restores fetch order, so the issue sequence is identical to a
    /// sequential run.
    pub fn evaluate_all(&self, files: &[ChangedFile]) -> Vec<Issue> {
        files
            .par_iter()
            .map(|file| evaluator::evaluate_file_isolated(file, &self.rules))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}
