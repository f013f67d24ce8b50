//! HTTP server tests.
//!
//! Spins up the real router on a random local port and exercises the
//! endpoints with a real HTTP client, using a stubbed fetcher so no
//! network access to GitHub is needed.

use std::sync::Arc;

use async_trait::async_trait;

use prlens::config::RulesConfig;
use prlens::github::{FetchError, PullRequestFetcher};
use prlens::models::ChangedFile;
use prlens::review::ReviewEngine;
use prlens::server::{build_router, AppState};

struct StubFetcher {
    result: Result<Vec<ChangedFile>, &'static str>,
}

#[async_trait]
impl PullRequestFetcher for StubFetcher {
    async fn fetch_pr_files(
        &self,
        _owner: &str,
        _repo: &str,
        _pr_number: u64,
    ) -> Result<Vec<ChangedFile>, FetchError> {
        match &self.result {
            Ok(files) => Ok(files.clone()),
            Err(kind) if *kind == "not_found" => Err(FetchError::NotFound),
            Err(other) => Err(FetchError::Upstream((*other).to_string())),
        }
    }
}

/// Serve the router on a random port and return its base URL.
async fn spawn_server(fetcher: StubFetcher) -> String {
    let state = Arc::new(AppState {
        engine: ReviewEngine::new(&RulesConfig::default(), None),
        fetcher: Arc::new(fetcher),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let base = spawn_server(StubFetcher { result: Ok(Vec::new()) }).await;

    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn review_returns_report_json() {
    let files = vec![ChangedFile::from_patch(
        "app.py",
        "@@ -1,0 +1,2 @@\n+result = eval(user_input)\n+password = \"abc123\"\n",
    )];
    let base = spawn_server(StubFetcher { result: Ok(files) }).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/review"))
        .json(&serde_json::json!({
            "repo_owner": "octocat",
            "repo_name": "demo",
            "pr_number": 1,
            "natural_language": true,
            "inline": true,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["score"], 70);
    assert_eq!(body["issues"].as_array().unwrap().len(), 2);
    assert_eq!(body["issues"][0]["kind"], "security_smell");
    assert_eq!(body["issues"][1]["kind"], "hardcoded_secret");
    assert_eq!(body["inline_comments"].as_array().unwrap().len(), 2);
    assert!(body["summary"].as_str().unwrap().contains("Score: 70/100"));
}

#[tokio::test]
async fn review_of_missing_pr_returns_404_error_body() {
    let base = spawn_server(StubFetcher { result: Err("not_found") }).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/review"))
        .json(&serde_json::json!({
            "repo_owner": "octocat",
            "repo_name": "demo",
            "pr_number": 999,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn invalid_request_returns_400() {
    let base = spawn_server(StubFetcher { result: Ok(Vec::new()) }).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/review"))
        .json(&serde_json::json!({
            "repo_owner": "",
            "repo_name": "demo",
            "pr_number": 1,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn upstream_failure_returns_502() {
    let base = spawn_server(StubFetcher { result: Err("rate limited") }).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/review"))
        .json(&serde_json::json!({
            "repo_owner": "octocat",
            "repo_name": "demo",
            "pr_number": 1,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 502);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "upstream_error");
}
