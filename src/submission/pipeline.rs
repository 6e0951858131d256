use axum::http::HeaderMap;
use bytes::Bytes;
use serde_json::{Map, Value};

use crate::models::response::now_timestamp;
use crate::models::SurveyResponse;
use crate::state::SharedState;
use crate::store::StoreError;

use super::normalize;
use super::parser;

pub struct PipelineResult {
    pub record: SurveyResponse,
    pub total: usize,
}

/// Parse the body, build the record and append it to the store.
///
/// A body that cannot be parsed is treated as an empty form, so the
/// submission is still recorded with every field empty.
pub async fn run(
    state: &SharedState,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<PipelineResult, StoreError> {
    let parsed = parser::parse(headers, body).await;

    let fields = parsed.unwrap_or_else(|e| {
        tracing::warn!("Unparseable submission body, recording empty fields: {e}");
        Value::Object(Map::new())
    });

    let record = normalize::to_record(&fields, now_timestamp());
    let total = state.store.append(record.clone()).await?;

    tracing::info!("Survey response recorded ({total} total)");

    Ok(PipelineResult { record, total })
}
