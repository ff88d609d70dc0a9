//! Request Specification
//!
//! The per-call description of one GET: URL, query, auth and timeout.

use crate::config::Credentials;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Query parameters keyed by their wire name
pub type Query = BTreeMap<String, QueryValue>;

/// A single scalar query value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Kept in the spec but left out of the encoded query string
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl QueryValue {
    /// Wire form of the value; `None` for `Null`
    ///
    /// Booleans are always the literals `true` / `false`.
    pub fn encode(&self) -> Option<String> {
        match self {
            QueryValue::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Null => Ok(()),
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Int(i) => write!(f, "{}", i),
            QueryValue::Float(x) => write!(f, "{}", x),
            QueryValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

macro_rules! int_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_query_value!(i32, i64, u8, u16, u32);

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}

/// Everything needed to issue one request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub url: String,
    pub query: Query,
    pub credentials: Credentials,
    pub timeout: Option<Duration>,
}

impl RequestSpec {
    /// Shallow overlay of caller options onto an endpoint's spec.
    ///
    /// A field set in `options` replaces the spec's field as a whole: an
    /// override `query` becomes the entire query, endpoint defaults are not
    /// merged back in.
    pub fn overlay(self, options: RequestOptions) -> Self {
        Self {
            url: options.url.unwrap_or(self.url),
            query: options.query.unwrap_or(self.query),
            credentials: options.credentials.unwrap_or(self.credentials),
            timeout: options.timeout.or(self.timeout),
        }
    }

    /// Query pairs as they go on the wire, skipping nulls
    pub fn encoded_query(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter_map(|(key, value)| value.encode().map(|v| (key.clone(), v)))
            .collect()
    }
}

/// Per-call overrides. Built fresh for every call; `Default` is empty.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub url: Option<String>,
    pub query: Option<Query>,
    pub credentials: Option<Credentials>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
