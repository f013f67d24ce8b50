//! Per-file heuristic evaluation.
//!
//! Ordering contract: hunks in patch order; within a hunk, per added
//! line, line rules in declared order; then the hunk rules. The result
//! for a file is therefore deterministic regardless of how files are
//! scheduled across threads.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::diff;
use crate::models::{ChangedFile, Issue};
use crate::rules::{LineContext, RuleSet};

/// Run every rule over the added lines of one file's patch.
///
/// Files without patch text (binary or oversized) yield no issues.
pub fn evaluate_file(file: &ChangedFile, rules: &RuleSet) -> Vec<Issue> {
    let Some(patch) = file.patch.as_deref() else {
        return Vec::new();
    };

    let mut issues = Vec::new();

    for hunk in diff::parse_patch(patch) {
        let added = hunk.added_lines();

        for (i, line) in added.iter().enumerate() {
            let ctx = LineContext {
                file: &file.path,
                line_no: line.line_no,
                text: line.text,
                following: &added[i + 1..],
            };
            for rule in &rules.line_rules {
                issues.extend(rule.evaluate(&ctx));
            }
        }

        for rule in &rules.hunk_rules {
            issues.extend(rule.evaluate(&file.path, &added));
        }
    }

    issues
}

/// Evaluate one file with panic isolation.
///
/// A defect in a heuristic must not abort the whole report: a panic
/// while scanning this file becomes a single `InternalError` issue and
/// the other files are unaffected.
pub fn evaluate_file_isolated(file: &ChangedFile, rules: &RuleSet) -> Vec<Issue> {
    match catch_unwind(AssertUnwindSafe(|| evaluate_file(file, rules))) {
        Ok(issues) => issues,
        Err(_) => {
            tracing::error!(file = %file.path, "heuristic evaluation panicked");
            vec![Issue::internal_error(&file.path)]
        }
    }
}
