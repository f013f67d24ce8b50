//! Review request contract and validation.

use serde::{Deserialize, Serialize};

/// A request to review one pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Repository owner (organisation or user).
    pub repo_owner: String,
    /// Repository name.
    pub repo_name: String,
    /// Pull request number.
    pub pr_number: u64,
    /// Request a human-readable summary alongside the issue list.
    #[serde(default)]
    pub natural_language: Option<bool>,
    /// Free-text question from the caller. A non-empty query also
    /// triggers the summary path and is forwarded to the summarizer.
    #[serde(default)]
    pub query: Option<String>,
    /// Request the inline-comment list.
    #[serde(default)]
    pub inline: Option<bool>,
}

impl ReviewRequest {
    /// Minimal request with all optional fields unset.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, pr_number: u64) -> Self {
        ReviewRequest {
            repo_owner: owner.into(),
            repo_name: repo.into(),
            pr_number,
            natural_language: None,
            query: None,
            inline: None,
        }
    }

    /// Check the request shape. Returns a caller-facing message on the
    /// first violated field.
    pub fn validate(&self) -> Result<(), String> {
        if self.repo_owner.trim().is_empty() {
            return Err("repo_owner must not be empty".to_string());
        }
        if self.repo_name.trim().is_empty() {
            return Err("repo_name must not be empty".to_string());
        }
        if self.pr_number == 0 {
            return Err("pr_number must be a positive integer".to_string());
        }
        Ok(())
    }

    /// Whether the summary generation path was requested, either
    /// explicitly or via a non-empty query.
    pub fn wants_summary(&self) -> bool {
        self.natural_language.unwrap_or(false)
            || self
                .query
                .as_deref()
                .is_some_and(|q| !q.trim().is_empty())
    }

    /// Whether the inline-comment list was requested.
    pub fn wants_inline_comments(&self) -> bool {
        self.inline.unwrap_or(false)
    }
}
