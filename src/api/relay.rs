//! Relay handlers: forward a page request to the worker and pass the answer back.

use serde_json::{Value, json};
use std::time::Instant;
use tracing::{error, info, warn};

use super::helpers;
use crate::clients::WorkerClient;
use crate::core::models::Operation;
use crate::errors::RelayError;

const EMPTY_JSON_BODY: &str = "{}";

/// Relays one inbound request for `operation`.
///
/// Always yields a response object: 200 with the worker body verbatim, 405
/// with no body for non-POST methods, otherwise `{"error": ...}`.
#[tracing::instrument(level = "info", skip(worker, operation, body), fields(operation = %operation))]
pub async fn relay(
    worker: &WorkerClient,
    operation: Operation,
    method: &str,
    body: Option<&str>,
) -> Value {
    let started = Instant::now();
    match forward(worker, operation, method, body).await {
        Ok(text) => {
            info!(
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "Relayed worker response"
            );
            helpers::ok_raw_json(text)
        }
        Err(e @ RelayError::MethodNotAllowed(_)) => {
            warn!(method, "Rejected request method");
            helpers::relay_error_response(&e)
        }
        Err(e) => {
            error!(
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                error = %e,
                "Relay failed"
            );
            helpers::relay_error_response(&e)
        }
    }
}

/// Validates the inbound request, makes the single worker call and checks
/// the reply. Returns the worker's body text untouched on success.
pub async fn forward(
    worker: &WorkerClient,
    operation: Operation,
    method: &str,
    body: Option<&str>,
) -> Result<String, RelayError> {
    if !method.eq_ignore_ascii_case("POST") {
        return Err(RelayError::MethodNotAllowed(method.to_string()));
    }

    // An absent or blank body is relayed as an empty JSON object
    let body = match body {
        Some(b) if !b.trim().is_empty() => b,
        _ => EMPTY_JSON_BODY,
    };
    serde_json::from_str::<Value>(body).map_err(|e| RelayError::InvalidBody(e.to_string()))?;

    let text = worker.post_raw(operation.worker_path(), body).await?;

    let parsed: Value = serde_json::from_str(&text).map_err(|e| {
        RelayError::MalformedUpstreamResponse(format!("body is not JSON: {e}"))
    })?;
    operation
        .check_response_shape(&parsed)
        .map_err(RelayError::MalformedUpstreamResponse)?;

    Ok(text)
}

pub async fn handle_summarise(worker: &WorkerClient, method: &str, body: Option<&str>) -> Value {
    relay(worker, Operation::Summarise, method, body).await
}

pub async fn handle_flashcards(worker: &WorkerClient, method: &str, body: Option<&str>) -> Value {
    relay(worker, Operation::Flashcards, method, body).await
}

/// Reports whether the worker answers on its root route.
pub async fn handle_health(worker: &WorkerClient, method: &str) -> Value {
    if !method.eq_ignore_ascii_case("GET") {
        return helpers::empty(405);
    }

    let worker_status = match worker.health().await {
        Ok(()) => "ok".to_string(),
        Err(e) => {
            warn!(error = %e, "Worker health probe failed");
            format!("error: {e}")
        }
    };

    helpers::ok_json(&json!({ "status": "ok", "worker": worker_status }))
}
