//! Response builders for API Gateway HTTP responses.

use serde_json::{Value, json};

use crate::errors::RelayError;

/// Returns a response whose body is already-serialized JSON, relayed as is.
#[must_use]
pub fn ok_raw_json(body: String) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "content-type": "application/json" },
        "body": body
    })
}

/// Returns a 200 OK response with the given JSON value as body.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    ok_raw_json(body.to_string())
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "content-type": "application/json" },
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns a response with a status code and no body.
#[must_use]
pub fn empty(status_code: u16) -> Value {
    json!({ "statusCode": status_code, "body": "" })
}

/// Returns an HTML page response.
#[must_use]
pub fn html(status_code: u16, page: String) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "content-type": "text/html; charset=utf-8" },
        "body": page
    })
}

/// Maps a relay failure onto its wire response.
///
/// Method errors carry no body; every other failure carries `{"error": ...}`.
#[must_use]
pub fn relay_error_response(error: &RelayError) -> Value {
    match error {
        RelayError::MethodNotAllowed(_) => empty(error.status_code()),
        other => err_response(other.status_code(), &other.to_string()),
    }
}

/// Status code of a built response.
#[must_use]
pub fn status_of(response: &Value) -> u16 {
    response
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
        .unwrap_or(500)
}

/// Body string of a built response.
#[must_use]
pub fn body_of(response: &Value) -> &str {
    response.get("body").and_then(Value::as_str).unwrap_or("")
}
