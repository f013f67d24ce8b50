//! Lint-style check: line length, whitespace, and discouraged constructs.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Issue, IssueKind, Severity};

use super::{LineContext, LineRule};

static PRINT_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprint\s*\(").expect("valid print pattern"));

/// A bare numeric literal of three or more digits.
static MAGIC_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3,}\b").expect("valid magic number pattern"));

/// Lines where a long number is expected: hex literals and SCREAMING
/// constants.
static MAGIC_NUMBER_EXEMPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[0-9a-fA-F]+|[A-Z_]{3,}").expect("valid exemption pattern"));

/// Fixed lint rules over one added line. All violations are Low
/// severity; one line can collect several.
pub struct StyleViolationRule {
    max_line_length: usize,
}

impl StyleViolationRule {
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    fn issue(&self, ctx: &LineContext<'_>, message: String) -> Issue {
        Issue {
            kind: IssueKind::StyleViolation,
            severity: Severity::Low,
            file: ctx.file.to_string(),
            line: Some(ctx.line_no),
            message,
        }
    }
}

impl LineRule for StyleViolationRule {
    fn name(&self) -> &'static str {
        "style"
    }

    fn evaluate(&self, ctx: &LineContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        let text = ctx.text;

        let width = text.chars().count();
        if width > self.max_line_length {
            issues.push(self.issue(
                ctx,
                format!(
                    "Line is {width} characters long (limit {}).",
                    self.max_line_length
                ),
            ));
        }
        if text.trim_end() != text {
            issues.push(self.issue(ctx, "Trailing whitespace.".to_string()));
        }
        if text.contains('\t') {
            issues.push(self.issue(ctx, "Tab character found; prefer spaces.".to_string()));
        }
        if PRINT_CALL.is_match(text) {
            issues.push(self.issue(
                ctx,
                "Avoid print() in production code; use logging.".to_string(),
            ));
        }
        if MAGIC_NUMBER.is_match(text) && !MAGIC_NUMBER_EXEMPT.is_match(text) {
            issues.push(self.issue(
                ctx,
                "Magic number; consider a named constant.".to_string(),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Vec<Issue> {
        let ctx = LineContext {
            file: "app.py",
            line_no: 7,
            text,
            following: &[],
        };
        StyleViolationRule::new(120).evaluate(&ctx)
    }

    #[test]
    fn flags_long_line() {
        let line = "comment = \"".to_string() + &"x".repeat(130) + "\"";
        let issues = check(&line);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Low);
        assert!(issues[0].message.contains("characters long"));
    }

    #[test]
    fn flags_trailing_whitespace_and_tabs() {
        assert_eq!(check("x = 1  ").len(), 1);
        assert_eq!(check("\tx = 1").len(), 1);
    }

    #[test]
    fn flags_print_call() {
        let issues = check("print(result)");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("print"));
    }

    #[test]
    fn flags_magic_number_but_not_constants() {
        assert_eq!(check("retry_after = 3600").len(), 1);
        assert!(check("TIMEOUT_SECS = 3600").is_empty());
        assert!(check("mask = 0xFF00").is_empty());
        assert!(check("x = 42").is_empty());
    }

    #[test]
    fn one_line_can_collect_multiple_violations() {
        let issues = check("\tprint(value)  ");
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn clean_line_passes() {
        assert!(check("count += 1").is_empty());
    }
}
