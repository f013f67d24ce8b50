//! Clap argument types.

use clap::{Parser, ValueEnum};

use prlens::models::Report;
use prlens::output::{json::JsonRenderer, terminal::TerminalRenderer, OutputRenderer};

/// Heuristic pull request review service.
#[derive(Parser, Debug)]
#[command(
    name = "prlens",
    version = prlens::constants::VERSION,
    about = "Heuristic pull request review service",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP review server.
    Serve(ServeArgs),

    /// Review one pull request and print the report.
    Review(Box<ReviewArgs>),

    /// Print version information.
    Version,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Socket address to bind (overrides config and PRLENS_BIND).
    #[arg(long)]
    pub bind: Option<String>,
}

/// Arguments for the `review` subcommand.
#[derive(Parser, Debug)]
pub struct ReviewArgs {
    /// Repository owner (organisation or user).
    #[arg(long)]
    pub owner: String,

    /// Repository name.
    #[arg(long)]
    pub repo: String,

    /// Pull request number.
    #[arg(long)]
    pub pr: u64,

    /// Include a human-readable summary in the report.
    #[arg(long, default_value_t = false)]
    pub natural_language: bool,

    /// Free-text question forwarded to the summarizer. A non-empty
    /// query also enables the summary.
    #[arg(long)]
    pub query: Option<String>,

    /// Include the inline-comment list.
    #[arg(long, default_value_t = false)]
    pub inline: bool,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Supported output formats for the `review` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a report in this format.
    pub fn render(&self, report: &Report) -> String {
        match self {
            OutputFormat::Terminal => TerminalRenderer.render(report),
            OutputFormat::Json => JsonRenderer.render(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_review_command() {
        let cli = Cli::parse_from([
            "prlens", "review", "--owner", "octocat", "--repo", "hello-world", "--pr", "42",
            "--inline",
        ]);
        match cli.command {
            Command::Review(args) => {
                assert_eq!(args.owner, "octocat");
                assert_eq!(args.repo, "hello-world");
                assert_eq!(args.pr, 42);
                assert!(args.inline);
                assert!(!args.natural_language);
                assert_eq!(args.format, OutputFormat::Terminal);
            }
            other => panic!("expected review command, got {other:?}"),
        }
    }

    #[test]
    fn parses_serve_command_with_bind() {
        let cli = Cli::parse_from(["prlens", "serve", "--bind", "0.0.0.0:9000"]);
        match cli.command {
            Command::Serve(args) => assert_eq!(args.bind.as_deref(), Some("0.0.0.0:9000")),
            other => panic!("expected serve command, got {other:?}"),
        }
    }

    #[test]
    fn review_requires_owner_repo_pr() {
        assert!(Cli::try_parse_from(["prlens", "review", "--owner", "o"]).is_err());
    }
}
