//! How the page reaches the relay handlers.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::state::CallOutcome;
use crate::api::{helpers, relay};
use crate::clients::WorkerClient;
use crate::core::models::{FlashcardsOut, Operation, SummaryOut, TextInput};

#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn summarise(&self, input: &TextInput) -> CallOutcome<SummaryOut>;
    async fn flashcards(&self, input: &TextInput) -> CallOutcome<FlashcardsOut>;
}

/// Calls the relay handlers in-process, going through the same code path
/// as an external `POST /api/...` request.
pub struct LocalRelay<'a> {
    worker: &'a WorkerClient,
}

impl<'a> LocalRelay<'a> {
    #[must_use]
    pub fn new(worker: &'a WorkerClient) -> Self {
        Self { worker }
    }

    async fn call<T: DeserializeOwned + Send>(&self, operation: Operation, input: &TextInput) -> CallOutcome<T> {
        let body = match serde_json::to_string(input) {
            Ok(body) => body,
            Err(e) => return CallOutcome::Failure(format!("Failed to encode request: {e}")),
        };
        let response = relay::relay(self.worker, operation, "POST", Some(&body)).await;
        decode_relay_response(&response)
    }
}

#[async_trait]
impl RelayClient for LocalRelay<'_> {
    async fn summarise(&self, input: &TextInput) -> CallOutcome<SummaryOut> {
        self.call(Operation::Summarise, input).await
    }

    async fn flashcards(&self, input: &TextInput) -> CallOutcome<FlashcardsOut> {
        self.call(Operation::Flashcards, input).await
    }
}

/// Turns a relay response object into a typed outcome.
///
/// Non-200 responses use their `error` field when present.
pub fn decode_relay_response<T: DeserializeOwned>(response: &Value) -> CallOutcome<T> {
    let status = helpers::status_of(response);
    let body = helpers::body_of(response);

    if status == 200 {
        return serde_json::from_str(body).map_or_else(
            |e| CallOutcome::Failure(format!("Unexpected response: {e}")),
            CallOutcome::Success,
        );
    }

    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {status}"));
    CallOutcome::Failure(message)
}
