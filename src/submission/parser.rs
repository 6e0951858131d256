use axum::http::HeaderMap;
use bytes::Bytes;
use serde_json::{Map, Value};

/// Parse a submission body based on its Content-Type header.
///
/// Form bodies become a JSON object of strings; a key sent more than once
/// (checkbox groups) becomes an array in submission order.
pub async fn parse(headers: &HeaderMap, body: Bytes) -> Result<Value, String> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parse_multipart(headers, body).await
    } else {
        parse_body(content_type, &body)
    }
}

/// Parse a non-multipart body. A missing Content-Type is read as a form.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or("application/x-www-form-urlencoded");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        Ok(parse_form_urlencoded(body))
    } else {
        // Try JSON first, then form-urlencoded
        Ok(serde_json::from_slice(body).unwrap_or_else(|_| parse_form_urlencoded(body)))
    }
}

/// Invalid UTF-8 in keys or values is replaced, not rejected.
fn parse_form_urlencoded(body: &[u8]) -> Value {
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body) {
        insert_field(&mut map, &k, v.into_owned());
    }
    Value::Object(map)
}

/// Parse multipart form data using multer.
async fn parse_multipart(headers: &HeaderMap, body: Bytes) -> Result<Value, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("unknown").to_string();
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        insert_field(&mut map, &name, value);
    }

    Ok(Value::Object(map))
}

/// `name[]` is folded into `name`. Repeats turn the entry into an array.
fn insert_field(map: &mut Map<String, Value>, name: &str, value: String) {
    let key = name.strip_suffix("[]").unwrap_or(name);
    let value = Value::String(value);

    match map.get_mut(key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(key.to_string(), value);
        }
    }
}
