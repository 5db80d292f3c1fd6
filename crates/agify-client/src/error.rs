use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failures surfaced by [`crate::AgifyClient`]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, DNS or timeout failure below the HTTP layer
    #[error("{context} failed: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error("{context} failed: request failed with status code {}", .status.as_u16())]
    Status {
        context: String,
        status: StatusCode,
        body: Option<Value>,
    },

    /// The underlying HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status of the failed call, when the service answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status(),
            Self::Client(_) => None,
        }
    }

    /// Decoded response body of a non-2xx answer
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// The `error` field of a JSON error body, e.g. `Invalid API key`
    pub fn service_message(&self) -> Option<&str> {
        self.body()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
