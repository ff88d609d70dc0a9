//! Shared helpers for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;
use xecd_rates::{ClientOptions, XecdClient};

pub const ACCOUNT_ID: &str = "accountId";
pub const API_KEY: &str = "apiKey";

/// `Basic base64("accountId:apiKey")`
pub const BASIC_AUTH: &str = "Basic YWNjb3VudElkOmFwaUtleQ==";

const TEST_DATA: &str = include_str!("../fixtures/testdata.json");

/// Install a tracing subscriber once; output shows with `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Named fixture from `fixtures/testdata.json`
pub fn fixture(name: &str) -> Value {
    let data: Value = serde_json::from_str(TEST_DATA).expect("fixture file is valid JSON");
    data.get(name)
        .cloned()
        .unwrap_or_else(|| panic!("missing fixture {name}"))
}

/// Mock server plus a client pointed at its `/v1/` root
pub async fn setup() -> (ServerGuard, XecdClient) {
    init_tracing();
    let server = mockito::Server::new_async().await;
    let client = XecdClient::with_options(
        ACCOUNT_ID,
        API_KEY,
        ClientOptions::new().base_url(format!("{}/v1/", server.url())),
    )
    .expect("client init");
    (server, client)
}

/// Expect one authenticated GET of `path` with exactly these query pairs
/// (order free) and answer with `body`
pub async fn mock_get(
    server: &mut ServerGuard,
    path: &str,
    query: &[(&str, &str)],
    body: &Value,
) -> Mock {
    let matchers = query
        .iter()
        .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
        .collect();

    server
        .mock("GET", path)
        .match_header("authorization", BASIC_AUTH)
        .match_query(Matcher::AllOf(matchers))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await
}
