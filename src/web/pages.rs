// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use super::AppState;
use crate::issues::IssueClusterRecord;
use crate::TARGET_WEB_REQUEST;

/// Representative titles shown per card on the board.
pub const MAX_CARD_TITLES: usize = 3;

/// One card on the issue board. Only the leading titles are shown.
pub struct IssueCard {
    pub id: i64,
    pub label: String,
    pub cluster_size: u64,
    pub titles: Vec<String>,
}

impl From<&IssueClusterRecord> for IssueCard {
    fn from(record: &IssueClusterRecord) -> Self {
        IssueCard {
            id: record.issue_cluster_id,
            label: record.issue_label.clone(),
            cluster_size: record.cluster_size,
            titles: record
                .representative_titles
                .iter()
                .take(MAX_CARD_TITLES)
                .cloned()
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "issues.html")]
pub struct IssueBoardTemplate {
    pub cards: Vec<IssueCard>,
    pub load_failed: bool,
}

#[derive(Template)]
#[template(path = "issue_detail.html")]
pub struct IssueDetailTemplate {
    pub issue: IssueClusterRecord,
}

#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub heading: String,
    pub message: String,
}

/// `GET /` and `GET /issues`
pub async fn issue_board(State(state): State<AppState>) -> Response {
    debug!(target: TARGET_WEB_REQUEST, "GET /issues");

    match state.provider.load_issues().await {
        Ok(issues) => render(
            StatusCode::OK,
            IssueBoardTemplate {
                cards: issues.iter().map(IssueCard::from).collect(),
                load_failed: false,
            },
        ),
        Err(e) => {
            error!(target: TARGET_WEB_REQUEST, "Failed to load issues for board: {}", e);
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                IssueBoardTemplate {
                    cards: Vec::new(),
                    load_failed: true,
                },
            )
        }
    }
}

/// `GET /issues/{id}`
pub async fn issue_detail(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return render(
            StatusCode::BAD_REQUEST,
            MessageTemplate {
                heading: "잘못된 요청입니다".to_string(),
                message: "이슈 ID는 숫자여야 합니다.".to_string(),
            },
        );
    };

    debug!(target: TARGET_WEB_REQUEST, "GET /issues/{}", id);

    match state.provider.find_issue(id).await {
        Ok(Some(issue)) => render(StatusCode::OK, IssueDetailTemplate { issue }),
        Ok(None) => render(
            StatusCode::NOT_FOUND,
            MessageTemplate {
                heading: "이슈를 찾을 수 없습니다".to_string(),
                message: format!("ID {} 에 해당하는 이슈가 없습니다.", id),
            },
        ),
        Err(e) => {
            error!(target: TARGET_WEB_REQUEST, "Failed to load issue {}: {}", id, e);
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                MessageTemplate {
                    heading: "데이터를 불러오지 못했습니다".to_string(),
                    message: "이슈 데이터를 불러오는 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요."
                        .to_string(),
                },
            )
        }
    }
}

fn render<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(target: TARGET_WEB_REQUEST, "Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_keeps_leading_titles_only() {
        let record = IssueClusterRecord {
            issue_cluster_id: 5,
            issue_label: "예산안 갈등".to_string(),
            cluster_size: 12,
            representative_titles: ["t1", "t2", "t3", "t4", "t5"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        };

        let card = IssueCard::from(&record);
        assert_eq!(card.titles, vec!["t1", "t2", "t3"]);
        assert_eq!(card.titles.len(), MAX_CARD_TITLES);
        assert_eq!(record.representative_titles.len(), 5);
    }
}
