use thiserror::Error;

/// Failures a relay handler turns into an HTTP response.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),
}

impl RelayError {
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed(_) => 405,
            Self::InvalidBody(_) => 400,
            Self::Upstream(_) | Self::MalformedUpstreamResponse(_) => 500,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Upstream(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid WORKER_URL `{value}`: {reason}")]
    InvalidWorkerUrl { value: String, reason: String },
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to render page: {0}")]
    Template(String),
}

impl From<minijinja::Error> for PageError {
    fn from(error: minijinja::Error) -> Self {
        PageError::Template(error.to_string())
    }
}
