//! API Module
//!
//! XECD endpoints and their parameters.

pub mod endpoint;
pub mod params;

pub use endpoint::Endpoint;
pub use params::{
    ApiRequest, ConvertFrom, ConvertTo, Currencies, HistoricRate, HistoricRatePeriod,
    MonthlyAverage,
};
