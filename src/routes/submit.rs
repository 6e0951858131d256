use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline;
use crate::views;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let result = pipeline::run(&state, &headers, body).await?;
    views::thanks::render(&result.record)
}
