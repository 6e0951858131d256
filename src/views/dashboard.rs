use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::report::{self, Tally};
use crate::state::SharedState;

struct TallyRow {
    label: String,
    count: u64,
    percent: u64,
}

struct TallySection {
    title: &'static str,
    rows: Vec<TallyRow>,
}

impl TallySection {
    fn new(title: &'static str, tally: &Tally, total: usize) -> Self {
        let rows = tally
            .iter()
            .map(|(label, count)| TallyRow {
                label: label.to_string(),
                count,
                percent: if total == 0 {
                    0
                } else {
                    (count * 100 / total as u64).min(100)
                },
            })
            .collect();
        Self { title, rows }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    total: usize,
    sections: Vec<TallySection>,
}

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let records = state.store.load().await;
    let tallies = report::aggregate(&records);
    let total = tallies.total;

    let template = DashboardTemplate {
        total,
        sections: vec![
            TallySection::new("Uses rebates", &tallies.uses, total),
            TallySection::new("Average project size", &tallies.avg_project_buckets, total),
            TallySection::new("Barriers", &tallies.barriers_count, total),
            TallySection::new("By state", &tallies.by_state, total),
            TallySection::new("Who files", &tallies.who_files_count, total),
        ],
    };
    super::render(&template)
}
