//! HTTP handlers and the error-to-response mapping.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::constants;
use crate::models::{Report, ReviewRequest};
use crate::review::ReviewError;

use super::AppState;

/// Liveness probe.
pub async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": constants::VERSION,
    }))
}

/// Review a pull request and return the structured report.
pub async fn review(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<Report>, ApiError> {
    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        owner = %request.repo_owner,
        repo = %request.repo_name,
        pr = request.pr_number,
        "review requested"
    );

    let report = state
        .engine
        .review(state.fetcher.as_ref(), &request)
        .await
        .map_err(|err| {
            tracing::warn!(%request_id, error = %err, kind = err.kind(), "review failed");
            ApiError(err)
        })?;

    tracing::info!(
        %request_id,
        score = report.score,
        issues = report.issues.len(),
        "review completed"
    );
    Ok(Json(report))
}

/// Wrapper mapping pipeline errors onto HTTP responses.
pub struct ApiError(pub ReviewError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ReviewError::Validation(_) => StatusCode::BAD_REQUEST,
            ReviewError::NotFound => StatusCode::NOT_FOUND,
            // The caller's request was fine; the hosting API call was not.
            ReviewError::Auth(_) | ReviewError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ReviewError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ReviewError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn error_status_mapping() {
        assert_eq!(
            status_of(ReviewError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ReviewError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ReviewError::Auth("denied".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(ReviewError::Upstream("503".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(ReviewError::Internal("bug".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
