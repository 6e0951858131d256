use serde_json::Value;

use crate::models::SurveyResponse;

/// Build a record from parsed fields. Nothing is validated: missing or
/// falsy fields become empty, a lone `barriers` value becomes a one-item
/// list.
pub fn to_record(fields: &Value, timestamp: String) -> SurveyResponse {
    SurveyResponse {
        timestamp,
        company_size: text(fields.get("companySize")),
        state: text(fields.get("state")),
        uses_rebates: text(fields.get("usesRebates")),
        avg_project_size: text(fields.get("avgProjectSize")),
        barriers: list(fields.get("barriers")),
        who_files: text(fields.get("whoFiles")),
        find_rebates: text(fields.get("findRebates")),
        email: text(fields.get("email")),
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(v) if is_falsy(v) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

fn list(value: Option<&Value>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(v) if is_falsy(v) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(|item| text(Some(item))).collect(),
        Some(other) => vec![text(Some(other))],
    }
}

/// `null`, `false`, `0` and `""` count as not submitted.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
