//! Client Module
//!
//! Request specification and HTTP transport.

pub mod http;
pub mod request;

pub use http::HttpClient;
pub use request::{Query, QueryValue, RequestOptions, RequestSpec};
