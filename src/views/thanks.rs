use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::models::SurveyResponse;

#[derive(Template)]
#[template(path = "thanks.html")]
struct ThanksTemplate<'a> {
    record: &'a SurveyResponse,
    barriers: String,
}

/// Confirmation page echoing the record that was just stored.
pub fn render(record: &SurveyResponse) -> Result<Html<String>, AppError> {
    let template = ThanksTemplate {
        record,
        barriers: record.barriers.join(", "),
    };
    super::render(&template)
}
