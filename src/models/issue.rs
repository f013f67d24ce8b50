//! Issue types representing heuristic results.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Severity level of an issue. Only used to compute the score penalty.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic problem (style violations).
    Low,
    /// Should be addressed before merge (missing documentation).
    Medium,
    /// Must be fixed (security smells, hardcoded secrets, complexity).
    High,
}

impl Severity {
    /// Score penalty subtracted per issue of this severity.
    pub fn penalty(self) -> u32 {
        match self {
            Severity::Low => 2,
            Severity::Medium => 7,
            Severity::High => 15,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// The category of an issue. Variant order is the declared order used
/// for summary counts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    SecuritySmell,
    HardcodedSecret,
    HighComplexity,
    MissingDocstring,
    StyleViolation,
    /// A file whose evaluation failed. Stands in for the issues that
    /// could not be detected there.
    InternalError,
}

impl IssueKind {
    /// Singular human-readable label, used in templated summaries.
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::SecuritySmell => "high-severity security smell",
            IssueKind::HardcodedSecret => "hardcoded secret",
            IssueKind::HighComplexity => "high-complexity change",
            IssueKind::MissingDocstring => "missing docstring",
            IssueKind::StyleViolation => "style violation",
            IssueKind::InternalError => "file that could not be analyzed",
        }
    }

    /// Plural form of [`IssueKind::label`].
    pub fn label_plural(self) -> &'static str {
        match self {
            IssueKind::SecuritySmell => "high-severity security smells",
            IssueKind::HardcodedSecret => "hardcoded secrets",
            IssueKind::HighComplexity => "high-complexity changes",
            IssueKind::MissingDocstring => "missing docstrings",
            IssueKind::StyleViolation => "style violations",
            IssueKind::InternalError => "files that could not be analyzed",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::SecuritySmell => write!(f, "security_smell"),
            IssueKind::HardcodedSecret => write!(f, "hardcoded_secret"),
            IssueKind::HighComplexity => write!(f, "high_complexity"),
            IssueKind::MissingDocstring => write!(f, "missing_docstring"),
            IssueKind::StyleViolation => write!(f, "style_violation"),
            IssueKind::InternalError => write!(f, "internal_error"),
        }
    }
}

/// A single issue detected in a changed file. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The category of the issue.
    pub kind: IssueKind,
    /// The severity, which determines the score penalty.
    pub severity: Severity,
    /// Path of the changed file the issue was found in.
    pub file: String,
    /// Line number in the new version of the file, when the issue is
    /// anchored to a specific line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Human-readable description.
    pub message: String,
}

impl Issue {
    /// Issue standing in for a file whose evaluation panicked.
    pub fn internal_error(file: &str) -> Self {
        Issue {
            kind: IssueKind::InternalError,
            severity: Severity::High,
            file: file.to_string(),
            line: None,
            message: "Evaluation of this file failed; its changes were not analyzed.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn severity_penalties() {
        assert_eq!(Severity::Low.penalty(), 2);
        assert_eq!(Severity::Medium.penalty(), 7);
        assert_eq!(Severity::High.penalty(), 15);
    }

    #[test]
    fn severity_from_str() {
        assert_eq!("low".parse::<Severity>(), Ok(Severity::Low));
        assert_eq!("MEDIUM".parse::<Severity>(), Ok(Severity::Medium));
        assert_eq!("High".parse::<Severity>(), Ok(Severity::High));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&IssueKind::HardcodedSecret).unwrap();
        assert_eq!(json, "\"hardcoded_secret\"");
        let back: IssueKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IssueKind::HardcodedSecret);
    }

    #[test]
    fn issue_omits_absent_line() {
        let issue = Issue::internal_error("a.py");
        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("line").is_none());
        assert_eq!(json["severity"], "high");
    }
}
