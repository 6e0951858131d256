pub mod export;
pub mod stats;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn survey_routes() -> Router<SharedState> {
    Router::new()
        .route("/submit", post(submit::submit))
        .route("/export.csv", get(export::export_csv))
        .route("/dashboard.json", get(stats::dashboard_json))
}
