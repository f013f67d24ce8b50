//! The terminal output object of a review: score, issues, and optional
//! summary and inline comments.

use serde::{Deserialize, Serialize};

use super::issue::Issue;

/// A review comment anchored to a specific file and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineComment {
    /// Path of the file the comment is anchored to.
    pub file: String,
    /// Line number in the new version of the file.
    pub line: u32,
    /// Comment text.
    pub body: String,
}

/// The result of reviewing one pull request. Exists only for the
/// duration of one request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Overall quality score in [0,100].
    pub score: u8,
    /// All detected issues, grouped by file in fetch order, then by
    /// appearance order within each file's diff.
    pub issues: Vec<Issue>,
    /// Human-readable summary; present when the caller requested the
    /// natural-language path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Inline comments for issues carrying a line number; present only
    /// when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_comments: Option<Vec<InlineComment>>,
}
