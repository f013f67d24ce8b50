//! Branching-complexity check.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::diff::AddedLine;
use crate::models::{Issue, IssueKind, Severity};

use super::HunkRule;

/// Conditional and loop keywords counted as branch points.
static BRANCH_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:if|elif|for|while|try|except|catch|with|match|case|switch)\b")
        .expect("valid branch keyword pattern")
});

/// Flags a hunk whose added lines contain more branch points than the
/// configured threshold. One High issue per flagged hunk, anchored at
/// the hunk's first added line.
pub struct HighComplexityRule {
    threshold: usize,
}

impl HighComplexityRule {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl HunkRule for HighComplexityRule {
    fn name(&self) -> &'static str {
        "complexity"
    }

    fn evaluate(&self, file: &str, added: &[AddedLine<'_>]) -> Vec<Issue> {
        let branches: usize = added
            .iter()
            .map(|l| BRANCH_KEYWORDS.find_iter(l.text).count())
            .sum();

        if branches <= self.threshold {
            return Vec::new();
        }

        vec![Issue {
            kind: IssueKind::HighComplexity,
            severity: Severity::High,
            file: file.to_string(),
            line: added.first().map(|l| l.line_no),
            message: format!(
                "High branching complexity in this change ({branches} branch points); consider refactoring."
            ),
        }]
    }
}
