use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One survey submission. Persisted with camelCase keys; fields absent from
/// an older file read back as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyResponse {
    pub timestamp: String,
    pub company_size: String,
    pub state: String,
    pub uses_rebates: String,
    pub avg_project_size: String,
    pub barriers: Vec<String>,
    pub who_files: String,
    pub find_rebates: String,
    pub email: String,
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T12:30:00.123Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
