//! Lambda handler for the API entrypoint - thin router over the relays and the page.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, page, parsing, relay};
use crate::clients::WorkerClient;
use crate::core::config::AppConfig;
use crate::errors::ConfigError;

pub use self::function_handler as handler;

/// Everything a request needs, built once at process start.
#[derive(Debug, Clone)]
pub struct AppState {
    pub worker: WorkerClient,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            worker: WorkerClient::new(config),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        AppConfig::from_env().map(Self::new)
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        self.worker.config()
    }
}

/// Lambda handler for the API entrypoint.
///
/// Never fails: every request resolves to a response object.
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(route(state, &event.payload).await)
}

/// Dispatches an API Gateway HTTP event to its handler.
pub async fn route(state: &AppState, payload: &Value) -> Value {
    let method = parsing::request_method(payload);
    let path = parsing::request_path(payload);
    let request_id = parsing::request_id(payload)
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);

    info!(request_id = %request_id, method = %method, path = %path, "Received request");

    const KNOWN_ROUTES: [&str; 4] = ["/api/summarise", "/api/flashcards", "/api/health", "/"];
    if !KNOWN_ROUTES.contains(&path) {
        return helpers::err_response(404, "Not found");
    }

    // Only POST handlers read the body; other methods must not fail on it
    let body = if method == "POST" {
        match parsing::extract_body(payload) {
            Ok(body) => body,
            Err(e) => {
                error!(request_id = %request_id, "Body decode error: {}", e);
                return helpers::err_response(400, &e);
            }
        }
    } else {
        None
    };
    let body = body.as_deref();

    let response = match path {
        "/api/summarise" => relay::handle_summarise(&state.worker, &method, body).await,
        "/api/flashcards" => relay::handle_flashcards(&state.worker, &method, body).await,
        "/api/health" => relay::handle_health(&state.worker, &method).await,
        _ => page::handle_page(&state.worker, &method, body).await,
    };

    info!(
        request_id = %request_id,
        status = helpers::status_of(&response),
        "Request completed"
    );
    response
}
