//! Heuristic rule set: a fixed, declared, ordered list of independent
//! pattern checks over the added lines of a diff.
//!
//! New rules plug in by implementing [`LineRule`] or [`HunkRule`] and
//! taking a slot in [`RuleSet::standard`]; the evaluator's control flow
//! never changes. Every check is side-effect-free and sees nothing
//! outside the file it is scanning.

pub mod complexity;
pub mod docstring;
pub mod secrets;
pub mod security;
pub mod style;

use crate::config::RulesConfig;
use crate::models::diff::AddedLine;
use crate::models::Issue;

/// Context handed to a per-line check.
pub struct LineContext<'a> {
    /// Path of the file being scanned.
    pub file: &'a str,
    /// Position of the line in the new version of the file.
    pub line_no: u32,
    /// Content of the added line, without the leading `+`.
    pub text: &'a str,
    /// Added lines after this one in the same hunk, in order.
    pub following: &'a [AddedLine<'a>],
}

/// A check evaluated once per added line. Returns zero or more issues.
pub trait LineRule: Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &LineContext<'_>) -> Vec<Issue>;
}

/// A check evaluated once per hunk, after that hunk's per-line checks.
pub trait HunkRule: Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, file: &str, added: &[AddedLine<'_>]) -> Vec<Issue>;
}

/// The declared rule ordering. Per added line, line rules run top to
/// bottom; hunk rules run after each hunk's lines.
pub struct RuleSet {
    pub line_rules: Vec<Box<dyn LineRule>>,
    pub hunk_rules: Vec<Box<dyn HunkRule>>,
}

impl RuleSet {
    /// The standard rule set, tuned by config.
    pub fn standard(cfg: &RulesConfig) -> Self {
        RuleSet {
            line_rules: vec![
                Box::new(docstring::MissingDocstringRule::new(cfg.docstring_lookahead)),
                Box::new(security::SecuritySmellRule::new()),
                Box::new(secrets::HardcodedSecretRule::new(&cfg.extra_secret_patterns)),
                Box::new(style::StyleViolationRule::new(cfg.max_line_length)),
            ],
            hunk_rules: vec![Box::new(complexity::HighComplexityRule::new(
                cfg.complexity_threshold,
            ))],
        }
    }
}
