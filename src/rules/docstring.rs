//! Missing-docstring check.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Issue, IssueKind, Severity};

use super::{LineContext, LineRule};

/// Definition-line patterns, each capturing the defined name.
static DEF_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Python function
        Regex::new(r"^\s*(?:async\s+)?def\s+(\w+)\s*\(").expect("valid def pattern"),
        // Python class
        Regex::new(r"^\s*class\s+(\w+)\s*[(:]").expect("valid class pattern"),
        // JS/TS function declaration
        Regex::new(r"^\s*(?:export\s+)?(?:async\s+)?function\s+(\w+)\s*\(")
            .expect("valid function pattern"),
    ]
});

/// Prefixes that count as a documentation comment.
const DOC_PREFIXES: &[&str] = &["\"\"\"", "'''", "/**", "/*", "//", "#"];

/// Flags newly added function/class definitions that have no
/// documentation comment within a fixed lookahead window of added
/// lines. Severity Medium.
pub struct MissingDocstringRule {
    lookahead: usize,
}

impl MissingDocstringRule {
    pub fn new(lookahead: usize) -> Self {
        Self { lookahead }
    }

    fn definition_name<'t>(&self, text: &'t str) -> Option<&'t str> {
        DEF_PATTERNS
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

fn is_doc_line(text: &str) -> bool {
    let trimmed = text.trim_start();
    DOC_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}

impl LineRule for MissingDocstringRule {
    fn name(&self) -> &'static str {
        "missing-docstring"
    }

    fn evaluate(&self, ctx: &LineContext<'_>) -> Vec<Issue> {
        let Some(name) = self.definition_name(ctx.text) else {
            return Vec::new();
        };

        let documented = ctx
            .following
            .iter()
            .take(self.lookahead)
            .any(|l| is_doc_line(l.text));
        if documented {
            return Vec::new();
        }

        vec![Issue {
            kind: IssueKind::MissingDocstring,
            severity: Severity::Medium,
            file: ctx.file.to_string(),
            line: Some(ctx.line_no),
            message: format!("`{name}` is added without a docstring; add a short explanation."),
        }]
    }
}
