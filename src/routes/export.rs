use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::report;
use crate::state::SharedState;

/// Full collection as a CSV download. Served without authentication,
/// see DESIGN.md.
pub async fn export_csv(State(state): State<SharedState>) -> impl IntoResponse {
    let records = state.store.load().await;
    let csv = report::csv::export(&records);

    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"responses.csv\"",
            ),
        ],
        csv,
    )
}
