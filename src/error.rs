//! XECD Error Types
//!
//! Every failure surfaces to the caller of the method that triggered it.
//! Nothing is retried or swallowed.

use reqwest::StatusCode;
use thiserror::Error;

/// Longest slice of a response body kept inside an error
const BODY_EXCERPT_LEN: usize = 500;

/// Main error type for XECD operations
#[derive(Debug, Error)]
pub enum XecdError {
    /// Invalid credentials, options or config file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything that went wrong during the request/response cycle
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failure of a single HTTP exchange
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the server
    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The request or response took too long
    #[error("Request timeout: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Request failed with status {status}: {body}")]
    Status {
        status: StatusCode,
        /// Excerpt of the body, for display
        body: String,
        /// The full body decoded as JSON, when it was JSON
        payload: Option<serde_json::Value>,
    },

    /// The body was not valid JSON
    #[error("Failed to parse response: {message}. Body: {body}")]
    Decode { message: String, body: String },

    /// Any other reqwest failure (building the request, reading the body)
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl TransportError {
    /// Build a status error. The JSON payload is decoded from the full body
    /// before it is cut down to an excerpt.
    pub fn status(status: StatusCode, body: &str) -> Self {
        TransportError::Status {
            status,
            body: excerpt(body),
            payload: serde_json::from_str(body).ok(),
        }
    }

    /// Build a decode error for a body that is not JSON
    pub fn decode(err: serde_json::Error, body: &str) -> Self {
        TransportError::Decode {
            message: err.to_string(),
            body: excerpt(body),
        }
    }

    /// The JSON error payload of a non-2xx response, when the server sent one
    pub fn api_error(&self) -> Option<&serde_json::Value> {
        match self {
            TransportError::Status { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err)
        } else if err.is_connect() {
            TransportError::Connect(err)
        } else {
            TransportError::Request(err)
        }
    }
}

impl XecdError {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            XecdError::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Whether this error came from the HTTP exchange rather than configuration
    pub fn is_transport(&self) -> bool {
        matches!(self, XecdError::Transport(_))
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LEN).collect()
}

/// Result type alias for XECD operations
pub type Result<T> = std::result::Result<T, XecdError>;
