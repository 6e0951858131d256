use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::models::options::{
    BARRIERS, COMPANY_SIZES, PROJECT_SIZE_BUCKETS, STATES, USES_REBATES, WHO_FILES,
};

#[derive(Template)]
#[template(path = "form.html")]
struct FormTemplate {
    company_sizes: &'static [&'static str],
    states: &'static [&'static str],
    uses_rebates: &'static [&'static str],
    project_sizes: &'static [&'static str],
    barriers: &'static [&'static str],
    who_files: &'static [&'static str],
}

pub async fn index() -> Result<Html<String>, AppError> {
    let template = FormTemplate {
        company_sizes: &COMPANY_SIZES,
        states: &STATES,
        uses_rebates: &USES_REBATES,
        project_sizes: &PROJECT_SIZE_BUCKETS,
        barriers: &BARRIERS,
        who_files: &WHO_FILES,
    };
    super::render(&template)
}
