//! End-to-end pipeline tests with a stubbed fetcher.
//!
//! These exercise the documented behaviour of the review pipeline:
//! scoring, ordering, idempotence, and error propagation.

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use prlens::config::RulesConfig;
use prlens::github::{FetchError, PullRequestFetcher};
use prlens::models::{ChangedFile, IssueKind, ReviewRequest, Severity};
use prlens::review::{ReviewEngine, ReviewError};

/// Fetcher returning a fixed file list, or a fixed error.
struct StubFetcher {
    result: Result<Vec<ChangedFile>, &'static str>,
}

impl StubFetcher {
    fn with_files(files: Vec<ChangedFile>) -> Self {
        Self { result: Ok(files) }
    }

    fn not_found() -> Self {
        Self { result: Err("not_found") }
    }
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

fn engine() -> ReviewEngine {
    ReviewEngine::new(&RulesConfig::default(), None)
}

#[tokio::test]
async fn eval_and_password_score_70() {
    let files = vec![ChangedFile::from_patch(
        "app.py",
        "@@ -1,0 +1,2 @@\n+result = eval(user_input)\n+password = \"abc123\"\n",
    )];
    let fetcher = StubFetcher::with_files(files);

    let report = engine()
        .review(&fetcher, &ReviewRequest::new("octocat", "demo", 1))
        .await
        .unwrap();

    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.issues[0].kind, IssueKind::SecuritySmell);
    assert_eq!(report.issues[0].severity, Severity::High);
    assert_eq!(report.issues[0].line, Some(1));
    assert_eq!(report.issues[1].kind, IssueKind::HardcodedSecret);
    assert_eq!(report.issues[1].severity, Severity::High);
    assert_eq!(report.issues[1].line, Some(2));
    assert_eq!(report.score, 70);
}

#[tokio::test]
async fn empty_pr_scores_100_with_no_issues_summary() {
    let fetcher = StubFetcher::with_files(Vec::new());

    let mut request = ReviewRequest::new("octocat", "demo", 2);
    request.natural_language = Some(true);

    let report = engine().review(&fetcher, &request).await.unwrap();

    assert_eq!(report.score, 100);
    assert!(report.issues.is_empty());
    assert_eq!(
        report.summary.as_deref(),
        Some("No issues found. Score: 100/100.")
    );
}

#[tokio::test]
async fn nonexistent_pr_is_an_error_not_a_zero_score_report() {
    let fetcher = StubFetcher::not_found();

    let err = engine()
        .review(&fetcher, &ReviewRequest::new("octocat", "demo", 999))
        .await
        .unwrap_err();

    assert!(matches!(err, ReviewError::NotFound));
    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn invalid_request_is_rejected_before_fetching() {
    let fetcher = StubFetcher::not_found();

    let err = engine()
        .review(&fetcher, &ReviewRequest::new("", "demo", 1))
        .await
        .unwrap_err();

    // Validation runs first: the stub's NotFound never surfaces.
    assert!(matches!(err, ReviewError::Validation(_)));
}

#[tokio::test]
async fn issues_are_grouped_by_fetch_order_then_line_order() {
    let files = vec![
        ChangedFile::from_patch(
            "zz_first.py",
            "@@ -1,0 +1,2 @@\n+import pickle\n+data = pickle.loads(blob)\n",
        ),
        ChangedFile::from_patch(
            "aa_second.py",
            "@@ -5,0 +5,1 @@\n+print(data)\n@@ -20,0 +21,1 @@\n+os.system(cmd)\n",
        ),
    ];
    let fetcher = StubFetcher::with_files(files);

    let report = engine()
        .review(&fetcher, &ReviewRequest::new("octocat", "demo", 3))
        .await
        .unwrap();

    let positions: Vec<(&str, Option<u32>)> = report
        .issues
        .iter()
        .map(|i| (i.file.as_str(), i.line))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("zz_first.py", Some(2)),
            ("aa_second.py", Some(5)),
            ("aa_second.py", Some(21)),
        ]
    );
}

#[tokio::test]
async fn pipeline_is_idempotent() {
    let files = vec![
        ChangedFile::from_patch(
            "a.py",
            "@@ -1,0 +1,3 @@\n+def handler(event):\n+    print(event)\n+    return eval(event)\n",
        ),
        ChangedFile::from_patch("b.py", "@@ -1,0 +1,1 @@\n+secret = \"supersecretvalue\"\n"),
    ];

    let mut request = ReviewRequest::new("octocat", "demo", 4);
    request.natural_language = Some(true);
    request.inline = Some(true);

    let first = engine()
        .review(&StubFetcher::with_files(files.clone()), &request)
        .await
        .unwrap();
    let second = engine()
        .review(&StubFetcher::with_files(files), &request)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn inline_comments_include_only_line_anchored_issues() {
    use prlens::models::Issue;
    use prlens::review::report::{assemble, inline_comments, AssembleOptions};

    // A line-less issue stays in the issue list but never becomes an
    // inline comment.
    let issues = vec![Issue::internal_error("broken.py")];
    assert!(inline_comments(&issues).is_empty());

    let opts = AssembleOptions {
        natural_language: false,
        inline_comments: true,
        query: None,
    };
    let report = assemble(issues, &opts, None).await;
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.inline_comments, Some(Vec::new()));
}

#[tokio::test]
async fn files_without_patch_text_are_skipped() {
    let files = vec![
        ChangedFile {
            path: "logo.png".into(),
            patch: None,
            additions: 0,
            deletions: 0,
        },
        ChangedFile::from_patch("app.py", "@@ -1,0 +1,1 @@\n+x = eval(y)\n"),
    ];
    let fetcher = StubFetcher::with_files(files);

    let report = engine()
        .review(&fetcher, &ReviewRequest::new("octocat", "demo", 5))
        .await
        .unwrap();

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].file, "app.py");
}

#[tokio::test]
async fn low_severity_floor_never_goes_negative() {
    // 60 added lines with trailing whitespace: 60 Low issues, raw
    // penalty 120 > 100, so the floor applies.
    let body: String = (0..60).map(|_| "+x = 1  \n").collect();
    let patch = format!("@@ -1,0 +1,60 @@\n{body}");
    let files = vec![ChangedFile::from_patch("pad.py", patch)];

    let report = engine()
        .review(
            &StubFetcher::with_files(files),
            &ReviewRequest::new("octocat", "demo", 6),
        )
        .await
        .unwrap();

    assert_eq!(report.issues.len(), 60);
    assert!(report.issues.iter().all(|i| i.severity == Severity::Low));
    assert_eq!(report.score, 0);
}
