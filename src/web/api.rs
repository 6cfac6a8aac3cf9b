use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error};

use super::AppState;
use crate::issues::IssueLoadError;
use crate::TARGET_WEB_REQUEST;

/// Body of every load failure. The underlying cause only goes to the log.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load issue meta";

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// `GET /api/issues`: the filtered snapshot as a JSON array.
pub async fn list_issues(State(state): State<AppState>) -> Response {
    debug!(target: TARGET_WEB_REQUEST, "GET /api/issues");

    match state.provider.load_issues().await {
        Ok(issues) => Json(issues).into_response(),
        Err(e) => load_failure(&e),
    }
}

/// `GET /api/issues/{id}`
pub async fn get_issue(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid issue id");
    };

    debug!(target: TARGET_WEB_REQUEST, "GET /api/issues/{}", id);

    match state.provider.find_issue(id).await {
        Ok(Some(issue)) => Json(issue).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Issue not found"),
        Err(e) => load_failure(&e),
    }
}

fn load_failure(err: &IssueLoadError) -> Response {
    error!(target: TARGET_WEB_REQUEST, "Failed to load issues: {}", err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, LOAD_FAILURE_MESSAGE)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
