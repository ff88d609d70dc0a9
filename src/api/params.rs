//! Endpoint Parameters
//!
//! One struct per endpoint. `Default` (or `new` where inputs are required)
//! matches the API defaults; setters chain.

use crate::api::endpoint::Endpoint;
use crate::client::{Query, QueryValue};

/// Parameters that know their endpoint and how to render their query
pub trait ApiRequest {
    const ENDPOINT: Endpoint;

    /// Query for this request, every parameter present (booleans included)
    fn query(&self) -> Query;
}

fn query_of<const N: usize>(pairs: [(&str, QueryValue); N]) -> Query {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

macro_rules! conversion_setters {
    ($ty:ident) => {
        impl $ty {
            /// Source currency ISO code, `*` for all
            pub fn from_currency(mut self, currency: impl Into<String>) -> Self {
                self.from_currency = currency.into();
                self
            }

            /// Target currency ISO code, `*` for all
            pub fn to_currency(mut self, currency: impl Into<String>) -> Self {
                self.to_currency = currency.into();
                self
            }

            pub fn amount(mut self, amount: impl Into<f64>) -> Self {
                self.amount = amount.into();
                self
            }

            /// Include obsolete currencies
            pub fn obsolete(mut self, obsolete: bool) -> Self {
                self.obsolete = obsolete;
                self
            }

            /// Also return the inverse rate
            pub fn inverse(mut self, inverse: bool) -> Self {
                self.inverse = inverse;
                self
            }
        }
    };
}

/// `currencies.json`
#[derive(Debug, Clone, PartialEq)]
pub struct Currencies {
    pub obsolete: bool,
    pub language: String,
    /// ISO codes, `*` for all
    pub iso: Vec<String>,
}

impl Default for Currencies {
    fn default() -> Self {
        Self {
            obsolete: false,
            language: "en".to_string(),
            iso: vec!["*".to_string()],
        }
    }
}

impl Currencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obsolete(mut self, obsolete: bool) -> Self {
        self.obsolete = obsolete;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn iso<I, S>(mut self, iso: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.iso = iso.into_iter().map(Into::into).collect();
        self
    }
}

impl ApiRequest for Currencies {
    const ENDPOINT: Endpoint = Endpoint::Currencies;

    fn query(&self) -> Query {
        query_of([
            ("obsolete", self.obsolete.into()),
            ("language", self.language.as_str().into()),
            ("iso", self.iso.join(",").into()),
        ])
    }
}

/// `convert_from.json`: one source currency into many targets
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertFrom {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub obsolete: bool,
    pub inverse: bool,
}

impl Default for ConvertFrom {
    fn default() -> Self {
        Self {
            from_currency: "USD".to_string(),
            to_currency: "*".to_string(),
            amount: 1.0,
            obsolete: false,
            inverse: false,
        }
    }
}

impl ConvertFrom {
    pub fn new() -> Self {
        Self::default()
    }
}

conversion_setters!(ConvertFrom);

impl ApiRequest for ConvertFrom {
    const ENDPOINT: Endpoint = Endpoint::ConvertFrom;

    fn query(&self) -> Query {
        query_of([
            ("from", self.from_currency.as_str().into()),
            ("to", self.to_currency.as_str().into()),
            ("amount", self.amount.into()),
            ("obsolete", self.obsolete.into()),
            ("inverse", self.inverse.into()),
        ])
    }
}

/// `convert_to.json`: many source currencies into one target
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertTo {
    pub to_currency: String,
    pub from_currency: String,
    pub amount: f64,
    pub obsolete: bool,
    pub inverse: bool,
}

impl Default for ConvertTo {
    fn default() -> Self {
        Self {
            to_currency: "USD".to_string(),
            from_currency: "*".to_string(),
            amount: 1.0,
            obsolete: false,
            inverse: false,
        }
    }
}

impl ConvertTo {
    pub fn new() -> Self {
        Self::default()
    }
}

conversion_setters!(ConvertTo);

impl ApiRequest for ConvertTo {
    const ENDPOINT: Endpoint = Endpoint::ConvertTo;

    fn query(&self) -> Query {
        query_of([
            ("to", self.to_currency.as_str().into()),
            ("from", self.from_currency.as_str().into()),
            ("amount", self.amount.into()),
            ("obsolete", self.obsolete.into()),
            ("inverse", self.inverse.into()),
        ])
    }
}

/// `historic_rate.json`: rates at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricRate {
    /// `YYYY-MM-DD`, sent as given
    pub date: String,
    /// `HH:MM`, sent as given
    pub time: String,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub obsolete: bool,
    pub inverse: bool,
}

impl HistoricRate {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            from_currency: "USD".to_string(),
            to_currency: "*".to_string(),
            amount: 1.0,
            obsolete: false,
            inverse: false,
        }
    }
}

conversion_setters!(HistoricRate);

impl ApiRequest for HistoricRate {
    const ENDPOINT: Endpoint = Endpoint::HistoricRate;

    fn query(&self) -> Query {
        query_of([
            ("from", self.from_currency.as_str().into()),
            ("to", self.to_currency.as_str().into()),
            ("amount", self.amount.into()),
            ("date", self.date.as_str().into()),
            ("time", self.time.as_str().into()),
            ("obsolete", self.obsolete.into()),
            ("inverse", self.inverse.into()),
        ])
    }
}

/// `historic_rate/period.json`: a paged series of rates
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricRatePeriod {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
    pub interval: String,
    pub obsolete: bool,
    pub inverse: bool,
    pub page: u32,
    pub per_page: u32,
}

impl Default for HistoricRatePeriod {
    fn default() -> Self {
        Self {
            amount: 1.0,
            from_currency: "USD".to_string(),
            to_currency: "*".to_string(),
            start_timestamp: None,
            end_timestamp: None,
            interval: "DAILY".to_string(),
            obsolete: false,
            inverse: false,
            page: 1,
            per_page: 30,
        }
    }
}

impl HistoricRatePeriod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.start_timestamp = Some(timestamp.into());
        self
    }

    pub fn end_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.end_timestamp = Some(timestamp.into());
        self
    }

    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

conversion_setters!(HistoricRatePeriod);

impl ApiRequest for HistoricRatePeriod {
    const ENDPOINT: Endpoint = Endpoint::HistoricRatePeriod;

    fn query(&self) -> Query {
        query_of([
            ("from", self.from_currency.as_str().into()),
            ("to", self.to_currency.as_str().into()),
            ("amount", self.amount.into()),
            ("start_timestamp", self.start_timestamp.clone().into()),
            ("end_timestamp", self.end_timestamp.clone().into()),
            ("interval", self.interval.as_str().into()),
            ("obsolete", self.obsolete.into()),
            ("inverse", self.inverse.into()),
            ("page", self.page.into()),
            ("per_page", self.per_page.into()),
        ])
    }
}

/// `monthly_average.json`
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAverage {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub year: Option<u16>,
    /// 1-12
    pub month: Option<u8>,
    pub obsolete: bool,
    pub inverse: bool,
}

impl Default for MonthlyAverage {
    fn default() -> Self {
        Self {
            amount: 1.0,
            from_currency: "USD".to_string(),
            to_currency: "*".to_string(),
            year: None,
            month: None,
            obsolete: false,
            inverse: false,
        }
    }
}

impl MonthlyAverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }
}

conversion_setters!(MonthlyAverage);

impl ApiRequest for MonthlyAverage {
    const ENDPOINT: Endpoint = Endpoint::MonthlyAverage;

    fn query(&self) -> Query {
        query_of([
            ("from", self.from_currency.as_str().into()),
            ("to", self.to_currency.as_str().into()),
            ("amount", self.amount.into()),
            ("year", self.year.into()),
            ("month", self.month.into()),
            ("obsolete", self.obsolete.into()),
            ("inverse", self.inverse.into()),
        ])
    }
}
