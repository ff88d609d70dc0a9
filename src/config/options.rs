//! Client Configuration
//!
//! Construction-time settings and the overlay that applies caller options to
//! the built-in defaults.

use crate::client::Query;
use crate::error::{Result, XecdError};
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// Root of every XECD endpoint
pub const DEFAULT_BASE_URL: &str = "https://xecdapi.xe.com/v1/";

/// HTTP basic auth pair sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// XECD account id, used as the basic auth user
    pub account_id: String,

    /// XECD API key, used as the basic auth password
    pub api_key: String,
}

impl Credentials {
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(XecdError::Config("account id must not be empty".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(XecdError::Config("api key must not be empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_key", &"***")
            .finish()
    }
}

/// Optional construction settings; every `Some` replaces the default outright
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Replaces the credentials passed to the constructor
    pub credentials: Option<Credentials>,

    /// Replaces [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,

    /// Query sent by endpoints that do not define their own
    pub default_query: Option<Query>,

    /// Whole-request timeout applied to every call
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn default_query(mut self, query: Query) -> Self {
        self.default_query = Some(query);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Effective client configuration, read-only once the client is built
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub base_url: String,
    pub default_query: Query,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Defaults for a given account, before any options are applied
    pub fn defaults(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(account_id, api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_query: Query::new(),
            timeout: None,
        }
    }

    /// Shallow overlay of `options` onto `self`.
    ///
    /// Each field set in `options` replaces the whole corresponding field.
    /// In particular a `default_query` replaces the existing map instead of
    /// being merged into it key by key.
    ///
    /// The result is validated: credentials must be non-empty and the base
    /// URL must be an absolute http(s) URL without query or fragment. A
    /// missing trailing `/` is added.
    pub fn overlay(self, options: ClientOptions) -> Result<Self> {
        let config = Self {
            credentials: options.credentials.unwrap_or(self.credentials),
            base_url: options.base_url.unwrap_or(self.base_url),
            default_query: options.default_query.unwrap_or(self.default_query),
            timeout: options.timeout.or(self.timeout),
        };

        config.credentials.validate()?;
        let base_url = normalize_base_url(&config.base_url)?;

        Ok(Self { base_url, ..config })
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)
        .map_err(|e| XecdError::Config(format!("Invalid base URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(XecdError::Config(format!(
            "Invalid base URL '{}': scheme must be http or https",
            raw
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(XecdError::Config(format!(
            "Invalid base URL '{}': query and fragment are not allowed",
            raw
        )));
    }

    let mut base_url = url.to_string();
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    Ok(base_url)
}
