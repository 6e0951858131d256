use axum::extract::State;
use axum::Json;

use crate::report::{self, Tallies};
use crate::state::SharedState;

pub async fn dashboard_json(State(state): State<SharedState>) -> Json<Tallies> {
    let records = state.store.load().await;
    Json(report::aggregate(&records))
}
