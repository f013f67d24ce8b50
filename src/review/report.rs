//! Report assembly: issues + score → the response object.

use indexmap::IndexMap;
use strum::IntoEnumIterator;

use crate::models::{InlineComment, Issue, IssueKind, Report};
use crate::providers::Summarizer;

use super::score::score;

/// What the caller asked the assembler to include.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Generate the human-readable summary.
    pub natural_language: bool,
    /// Include the inline-comment list.
    pub inline_comments: bool,
    /// Caller's free-text question, forwarded to the summarizer.
    pub query: Option<String>,
}

/// Count issues per kind, in declared kind order, skipping zero counts.
fn kind_counts(issues: &[Issue]) -> IndexMap<IssueKind, usize> {
    let mut counts: IndexMap<IssueKind, usize> = IssueKind::iter().map(|k| (k, 0)).collect();
    for issue in issues {
        *counts.entry(issue.kind).or_default() += 1;
    }
    counts.retain(|_, count| *count > 0);
    counts
}

/// Deterministic template-filled summary, e.g.
/// "2 high-severity security smells, 1 missing docstring. Score: 63/100."
pub fn templated_summary(issues: &[Issue], score: u8) -> String {
    let counts = kind_counts(issues);
    if counts.is_empty() {
        return format!("No issues found. Score: {score}/100.");
    }

    let parts: Vec<String> = counts
        .iter()
        .map(|(kind, count)| {
            let label = if *count == 1 {
                kind.label()
            } else {
                kind.label_plural()
            };
            format!("{count} {label}")
        })
        .collect();

    format!("{}. Score: {score}/100.", parts.join(", "))
}

/// Map every issue carrying a line number to an inline comment at that
/// file/line. Line-less issues stay in the main list only.
pub fn inline_comments(issues: &[Issue]) -> Vec<InlineComment> {
    issues
        .iter()
        .filter_map(|issue| {
            issue.line.map(|line| InlineComment {
                file: issue.file.clone(),
                line,
                body: issue.message.clone(),
            })
        })
        .collect()
}

/// Build the final report.
///
/// When a summarizer is available and the summary path was requested,
/// it may paraphrase the templated summary; any failure falls back to
/// the template so the report never depends on the LLM being up.
pub async fn assemble(
    issues: Vec<Issue>,
    opts: &AssembleOptions,
    summarizer: Option<&dyn Summarizer>,
) -> Report {
    let score = score(&issues);

    let summary = if opts.natural_language {
        let template = templated_summary(&issues, score);
        match summarizer {
            Some(s) => match s.paraphrase(&template, &issues, opts.query.as_deref()).await {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!("summarizer failed, falling back to template: {e}");
                    Some(template)
                }
            },
            None => Some(template),
        }
    } else {
        None
    };

    let inline = opts.inline_comments.then(|| inline_comments(&issues));

    Report {
        score,
        issues,
        summary,
        inline_comments: inline,
    }
}
