use std::env;

use url::Url;

use crate::errors::ConfigError;

/// Environment variable naming the worker service location.
pub const WORKER_URL_VAR: &str = "WORKER_URL";

/// Worker location used when `WORKER_URL` is unset.
pub const DEFAULT_WORKER_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the worker, without a trailing slash.
    pub worker_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            worker_base_url: DEFAULT_WORKER_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// Blank values count as unset. Anything else must be an absolute
    /// `http`/`https` URL with a host.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(WORKER_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_WORKER_BASE_URL.to_string());

        Ok(Self {
            worker_base_url: validate_worker_url(&raw)?,
        })
    }

    /// Full URL for a worker endpoint path such as `/summarise`.
    #[must_use]
    pub fn worker_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.worker_base_url, path.trim_start_matches('/'))
    }
}

fn validate_worker_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidWorkerUrl {
        value: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
