use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::models::SurveyResponse;
use crate::state::SharedState;

struct ResponseRow {
    record: SurveyResponse,
    barriers: String,
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    total: usize,
    rows: Vec<ResponseRow>,
}

/// Every stored response in submission order. Served without
/// authentication, see DESIGN.md.
pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let rows: Vec<ResponseRow> = state
        .store
        .load()
        .await
        .into_iter()
        .map(|record| ResponseRow {
            barriers: record.barriers.join(", "),
            record,
        })
        .collect();

    let template = AdminTemplate {
        total: rows.len(),
        rows,
    };
    super::render(&template)
}
