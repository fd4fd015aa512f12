//! HTTP client for the external text-processing worker.
//!
//! The worker is opaque to this crate: bodies are forwarded as raw bytes and
//! responses come back as raw text. Shape checks live in the relay.

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::Duration;
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::RelayError;

/// Upper bound on a single worker call.
pub const WORKER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct WorkerClient {
    http: Client,
    config: AppConfig,
}

impl WorkerClient {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let http = Client::builder()
            .timeout(WORKER_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http, config }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// POSTs `body` unchanged to `path` and returns the worker's body text.
    ///
    /// Transport failures, timeouts and non-2xx statuses all become
    /// [`RelayError::Upstream`]. Exactly one request is made.
    pub async fn post_raw(&self, path: &str, body: &str) -> Result<String, RelayError> {
        let url = self.config.worker_endpoint(path);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body.to_owned())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            warn!(url = %url, status = status.as_u16(), body = %body_text, "Worker returned error status");
            return Err(RelayError::Upstream(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        let text = response.text().await?;
        info!(url = %url, status = status.as_u16(), bytes = text.len(), "Worker call succeeded");
        Ok(text)
    }

    /// Probes the worker's root route.
    pub async fn health(&self) -> Result<(), RelayError> {
        let url = self.config.worker_endpoint("/");
        let response = self.http.get(&url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(RelayError::Upstream(format!(
                "Request failed with status code {}",
                response.status().as_u16()
            )))
        }
    }
}
