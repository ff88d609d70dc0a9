//! HTTP Transport
//!
//! One authenticated GET per call, decoded as JSON.

use crate::client::request::RequestSpec;
use crate::error::{Result, TransportError, XecdError};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared transport settings. Sessions are opened per request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Time allowed to establish a connection
    connect_timeout: Duration,

    /// `User-Agent` header sent with every request
    user_agent: String,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Replace the default `xecd-rates/<version>` user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Open a session scoped to a single request. Failing here is part of
    /// the request cycle, so it is a transport error.
    fn session(&self, timeout: Option<Duration>) -> Result<Client> {
        let mut builder = Client::builder()
            .user_agent(self.user_agent.as_str())
            .connect_timeout(self.connect_timeout);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| TransportError::from(e).into())
    }

    /// Issue `spec` as a basic-auth GET and return the decoded body.
    ///
    /// Non-2xx statuses and bodies that are not JSON fail. A 2xx body is
    /// returned untouched, even when it describes an API-level error.
    pub async fn send(&self, spec: RequestSpec) -> Result<Value> {
        let session = self.session(spec.timeout)?;
        let query = spec.encoded_query();

        debug!(url = %spec.url, ?query, "xecd request");

        let mut request = session.get(&spec.url).basic_auth(
            &spec.credentials.account_id,
            Some(&spec.credentials.api_key),
        );
        if !query.is_empty() {
            request = request.query(&query);
        }

        let response = request.send().await.map_err(TransportError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(TransportError::from)?;

        debug!(url = %spec.url, %status, bytes = body.len(), "xecd response");

        if !status.is_success() {
            warn!(url = %spec.url, %status, "xecd request rejected");
            return Err(TransportError::status(status, &body).into());
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(url = %spec.url, error = %e, "xecd response is not JSON");
            TransportError::decode(e, &body).into()
        })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
