//! prlens — heuristic pull request review service.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prlens::config::{Config, SummaryConfig};
use prlens::constants;
use prlens::env::Env;
use prlens::github::GitHubClient;
use prlens::models::ReviewRequest;
use prlens::providers::rig::RigSummarizer;
use prlens::providers::Summarizer;
use prlens::review::ReviewEngine;
use prlens::server::{self, AppState};

use cli::args::{Cli, Command};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the
/// default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", constants::APP_NAME)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Review(args) => run_review(*args).await,
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Load config and build the shared application state.
fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let fetcher = GitHubClient::new(&config.github)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to build GitHub client")?;

    let summarizer = build_summarizer(&config.summary);
    let engine = ReviewEngine::new(&config.rules, summarizer);

    Ok(Arc::new(AppState {
        engine,
        fetcher: Arc::new(fetcher),
    }))
}

/// Build the optional LLM summarizer. A misconfigured summarizer is
/// downgraded to the templated fallback with a warning, never an error.
fn build_summarizer(config: &SummaryConfig) -> Option<Arc<dyn Summarizer>> {
    if !config.enabled {
        return None;
    }
    match RigSummarizer::new(config.clone()) {
        Ok(summarizer) => Some(Arc::new(summarizer)),
        Err(e) => {
            tracing::warn!("summarizer disabled: {e}");
            None
        }
    }
}

/// Run the HTTP server.
async fn run_serve(args: cli::args::ServeArgs) -> Result<()> {
    let config = Config::load(std::env::current_dir().ok().as_deref(), &Env::real())
        .context("failed to load configuration")?;

    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address: {bind}"))?;

    let state = build_state(&config)?;
    server::serve(addr, state).await
}

/// Review one pull request from the command line.
async fn run_review(args: cli::args::ReviewArgs) -> Result<()> {
    let config = Config::load(std::env::current_dir().ok().as_deref(), &Env::real())
        .context("failed to load configuration")?;

    let state = build_state(&config)?;

    let request = ReviewRequest {
        repo_owner: args.owner,
        repo_name: args.repo,
        pr_number: args.pr,
        natural_language: Some(args.natural_language),
        query: args.query,
        inline: Some(args.inline),
    };

    let report = state
        .engine
        .review(state.fetcher.as_ref(), &request)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("review failed")?;

    print!("{}", args.format.render(&report));
    Ok(())
}
