//! Dangerous-call pattern check.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Issue, IssueKind, Severity};

use super::{LineContext, LineRule};

/// Known-dangerous call patterns with their messages, in declared order.
static INSECURE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\beval\s*\(", "Avoid eval(): code injection risk."),
        (r"\bexec\s*\(", "Avoid exec(): arbitrary code execution risk."),
        (
            r"subprocess\.[A-Za-z_]+\(.*shell\s*=\s*True",
            "subprocess with shell=True is dangerous; pass an argument list instead.",
        ),
        (
            r"\bos\.system\s*\(",
            "os.system() runs through the shell; prefer subprocess with an argument list.",
        ),
        (
            r"\bpickle\.loads?\s*\(",
            "Deserializing untrusted pickle data can execute arbitrary code; use a safer format.",
        ),
        (
            r"requests\.\w+\(.*verify\s*=\s*False",
            "TLS certificate verification is disabled; restore verify=True.",
        ),
    ]
    .into_iter()
    .map(|(pattern, message)| {
        (
            Regex::new(pattern).expect("valid insecure pattern"),
            message,
        )
    })
    .collect()
});

/// Flags added lines that invoke known-dangerous calls. One issue per
/// matching pattern, so a line can yield several. Severity High.
pub struct SecuritySmellRule;

impl SecuritySmellRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SecuritySmellRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for SecuritySmellRule {
    fn name(&self) -> &'static str {
        "security-smell"
    }

    fn evaluate(&self, ctx: &LineContext<'_>) -> Vec<Issue> {
        INSECURE_PATTERNS
            .iter()
            .filter(|(re, _)| re.is_match(ctx.text))
            .map(|(_, message)| Issue {
                kind: IssueKind::SecuritySmell,
                severity: Severity::High,
                file: ctx.file.to_string(),
                line: Some(ctx.line_no),
                message: (*message).to_string(),
            })
            .collect()
    }
}
