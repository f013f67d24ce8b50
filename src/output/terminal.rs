//! Terminal renderer: styled flowing text grouped by file.
//!
//! Output style inspired by Semgrep/PHPStan — no tables.

use colored::Colorize;

use crate::models::{Report, Severity};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &Report) -> String {
        let mut output = String::new();

        let score_str = format!("{}/100", report.score);
        let score_colored = if report.score >= 90 {
            score_str.green().bold()
        } else if report.score >= 70 {
            score_str.yellow().bold()
        } else {
            score_str.red().bold()
        };
        output.push_str(&format!(" {} {}\n\n", "Score:".bold(), score_colored));

        if report.issues.is_empty() {
            output.push_str(&format!("{}", "  ✔ No issues found.\n".green()));
        } else {
            let mut current_file = "";

            for issue in &report.issues {
                // Group by file; issues are already in file-then-line order
                if issue.file != current_file {
                    if !current_file.is_empty() {
                        output.push('\n');
                    }
                    current_file = &issue.file;
                }

                let (icon, severity_str) = match issue.severity {
                    Severity::High => (
                        "✖".red().bold().to_string(),
                        "high".red().bold().to_string(),
                    ),
                    Severity::Medium => (
                        "⚠".yellow().bold().to_string(),
                        "medium".yellow().bold().to_string(),
                    ),
                    Severity::Low => (
                        "ℹ".blue().bold().to_string(),
                        "low".blue().bold().to_string(),
                    ),
                };

                let location = match issue.line {
                    Some(line) => format!("{}:{}", issue.file, line),
                    None => issue.file.clone(),
                };

                output.push_str(&format!(
                    " {} {} in {}\n",
                    icon,
                    severity_str,
                    location.bold()
                ));
                output.push_str(&format!(
                    "   {} — {}\n",
                    issue.kind.label().bold(),
                    issue.message
                ));
            }

            let (high, medium, low) =
                report
                    .issues
                    .iter()
                    .fold((0usize, 0usize, 0usize), |(h, m, l), issue| {
                        match issue.severity {
                            Severity::High => (h + 1, m, l),
                            Severity::Medium => (h, m + 1, l),
                            Severity::Low => (h, m, l + 1),
                        }
                    });

            output.push_str(&format!(
                "\n{}\n",
                "───────────────────────────────────".dimmed()
            ));
            output.push_str(&format!(
                " {} issues: {} high, {} medium, {} low\n",
                report.issues.len().to_string().bold(),
                high.to_string().red().bold(),
                medium.to_string().yellow().bold(),
                low.to_string().blue().bold(),
            ));
        }

        if let Some(ref summary) = report.summary {
            output.push_str(&format!("\n {}\n {}\n", "Summary".bold(), summary));
        }

        output
    }
}
