//! Accessors for API Gateway HTTP event payloads (v1 and v2 shapes).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Upper-cased HTTP method, `GET` when the event carries none.
pub fn request_method(payload: &Value) -> String {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
        .to_ascii_uppercase()
}

/// Request path with any trailing slash removed (`/` stays `/`).
pub fn request_path(payload: &Value) -> &str {
    let raw = v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("/");
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

pub fn request_id(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "requestId"])
}

/// Decoded request body; `None` when the event has no body at all.
pub fn extract_body(payload: &Value) -> Result<Option<String>, String> {
    let Some(body) = payload.get("body").and_then(|b| b.as_str()) else {
        return Ok(None);
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(Some(body.to_string()));
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| format!("Failed to decode base64 body: {e}"))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| format!("Body is not valid UTF-8: {e}"))
}
