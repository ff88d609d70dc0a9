//! XECD Rates - XE Currency Data API client
//!
//! Typed async access to the XECD REST API: account info, currency lists,
//! conversions, historic rates and monthly averages. Every call is one
//! basic-auth GET whose JSON body is returned as-is.
//!
//! ```no_run
//! use xecd_rates::{HistoricRate, XecdClient};
//!
//! # async fn run() -> xecd_rates::Result<()> {
//! let client = XecdClient::new("account-id", "api-key")?;
//! let rates = client
//!     .historic_rate(
//!         HistoricRate::new("2016-12-25", "12:34")
//!             .from_currency("EUR")
//!             .to_currency("CAD")
//!             .amount(55),
//!     )
//!     .await?;
//! println!("{}", rates);
//! # Ok(())
//! # }
//! ```

use serde_json::Value;
use std::path::Path;

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{
    ApiRequest, ConvertFrom, ConvertTo, Currencies, Endpoint, HistoricRate, HistoricRatePeriod,
    MonthlyAverage,
};
pub use client::{HttpClient, Query, QueryValue, RequestOptions, RequestSpec};
pub use config::{ClientConfig, ClientOptions, ConfigLoader, Credentials, DEFAULT_BASE_URL};
pub use error::{Result, TransportError, XecdError};

/// The XECD client
///
/// Holds read-only configuration; each call builds its own request and
/// opens its own HTTP session, so a client can be shared across tasks.
#[derive(Debug, Clone)]
pub struct XecdClient {
    /// Effective configuration
    config: ClientConfig,

    /// HTTP transport
    http_client: HttpClient,
}

impl XecdClient {
    /// Create a client with the default endpoint root
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(account_id, api_key, ClientOptions::default())
    }

    /// Create a client, overlaying `options` onto the defaults
    pub fn with_options(
        account_id: impl Into<String>,
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self> {
        let config = ClientConfig::defaults(account_id, api_key).overlay(options)?;
        Ok(Self {
            config,
            http_client: HttpClient::new(),
        })
    }

    /// Create a client from `.env`, environment variables and the default
    /// config file locations
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_loader(ConfigLoader::new()?)
    }

    /// Create a client from a specific config file (environment still wins)
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_loader(ConfigLoader::from_path(path)?)
    }

    fn from_loader(loader: ConfigLoader) -> Result<Self> {
        let (credentials, options) = loader.into_parts()?;
        Self::with_options(credentials.account_id, credentials.api_key, options)
    }

    /// Get the effective configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Spec for `endpoint` with the given query and the client's auth
    fn base_spec(&self, endpoint: Endpoint, query: Query) -> RequestSpec {
        RequestSpec {
            url: endpoint.url(&self.config.base_url),
            query,
            credentials: self.config.credentials.clone(),
            timeout: self.config.timeout,
        }
    }

    /// Build the request `params` would issue, with `options` overlaid
    pub fn request_spec<P: ApiRequest>(&self, params: &P, options: RequestOptions) -> RequestSpec {
        self.base_spec(P::ENDPOINT, params.query()).overlay(options)
    }

    /// Send a fully built request
    pub async fn send(&self, spec: RequestSpec) -> Result<Value> {
        self.http_client.send(spec).await
    }

    async fn request<P: ApiRequest>(&self, params: &P, options: RequestOptions) -> Result<Value> {
        self.send(self.request_spec(params, options)).await
    }

    /// Account details and package limits
    pub async fn account_info(&self) -> Result<Value> {
        self.account_info_with(RequestOptions::default()).await
    }

    /// [`account_info`](Self::account_info) with per-call overrides
    ///
    /// Sends the client's default query unless `options.query` is set.
    pub async fn account_info_with(&self, options: RequestOptions) -> Result<Value> {
        let spec = self
            .base_spec(Endpoint::AccountInfo, self.config.default_query.clone())
            .overlay(options);
        self.send(spec).await
    }

    /// Currencies known to the service
    pub async fn currencies(&self, params: Currencies) -> Result<Value> {
        self.currencies_with(params, RequestOptions::default()).await
    }

    /// [`currencies`](Self::currencies) with per-call overrides
    pub async fn currencies_with(
        &self,
        params: Currencies,
        options: RequestOptions,
    ) -> Result<Value> {
        self.request(&params, options).await
    }

    /// Convert from one currency into one or more others
    pub async fn convert_from(&self, params: ConvertFrom) -> Result<Value> {
        self.convert_from_with(params, RequestOptions::default()).await
    }

    /// [`convert_from`](Self::convert_from) with per-call overrides
    pub async fn convert_from_with(
        &self,
        params: ConvertFrom,
        options: RequestOptions,
    ) -> Result<Value> {
        self.request(&params, options).await
    }

    /// Convert from one or more currencies into one
    pub async fn convert_to(&self, params: ConvertTo) -> Result<Value> {
        self.convert_to_with(params, RequestOptions::default()).await
    }

    /// [`convert_to`](Self::convert_to) with per-call overrides
    pub async fn convert_to_with(
        &self,
        params: ConvertTo,
        options: RequestOptions,
    ) -> Result<Value> {
        self.request(&params, options).await
    }

    /// Rates at a given date and time
    pub async fn historic_rate(&self, params: HistoricRate) -> Result<Value> {
        self.historic_rate_with(params, RequestOptions::default())
            .await
    }

    /// [`historic_rate`](Self::historic_rate) with per-call overrides
    pub async fn historic_rate_with(
        &self,
        params: HistoricRate,
        options: RequestOptions,
    ) -> Result<Value> {
        self.request(&params, options).await
    }

    /// One page of rates over a period
    pub async fn historic_rate_period(&self, params: HistoricRatePeriod) -> Result<Value> {
        self.historic_rate_period_with(params, RequestOptions::default())
            .await
    }

    /// [`historic_rate_period`](Self::historic_rate_period) with per-call overrides
    pub async fn historic_rate_period_with(
        &self,
        params: HistoricRatePeriod,
        options: RequestOptions,
    ) -> Result<Value> {
        self.request(&params, options).await
    }

    /// Monthly average rates
    pub async fn monthly_average(&self, params: MonthlyAverage) -> Result<Value> {
        self.monthly_average_with(params, RequestOptions::default())
            .await
    }

    /// [`monthly_average`](Self::monthly_average) with per-call overrides
    pub async fn monthly_average_with(
        &self,
        params: MonthlyAverage,
        options: RequestOptions,
    ) -> Result<Value> {
        self.request(&params, options).await
    }
}
