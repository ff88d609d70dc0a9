//! XECD endpoint paths, relative to the API root.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AccountInfo,
    Currencies,
    ConvertFrom,
    ConvertTo,
    HistoricRate,
    HistoricRatePeriod,
    MonthlyAverage,
}

impl Endpoint {
    pub const ALL: [Endpoint; 7] = [
        Endpoint::AccountInfo,
        Endpoint::Currencies,
        Endpoint::ConvertFrom,
        Endpoint::ConvertTo,
        Endpoint::HistoricRate,
        Endpoint::HistoricRatePeriod,
        Endpoint::MonthlyAverage,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::AccountInfo => "account_info.json",
            Endpoint::Currencies => "currencies.json",
            Endpoint::ConvertFrom => "convert_from.json",
            Endpoint::ConvertTo => "convert_to.json",
            Endpoint::HistoricRate => "historic_rate.json",
            Endpoint::HistoricRatePeriod => "historic_rate/period.json",
            Endpoint::MonthlyAverage => "monthly_average.json",
        }
    }

    /// `base_url` is expected to end with `/`
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let base = "https://xecdapi.xe.com/v1/";
        assert_eq!(
            Endpoint::HistoricRatePeriod.url(base),
            "https://xecdapi.xe.com/v1/historic_rate/period.json"
        );
        assert_eq!(
            Endpoint::AccountInfo.url(base),
            "https://xecdapi.xe.com/v1/account_info.json"
        );
    }

    #[test]
    fn test_paths_are_json_resources() {
        for endpoint in Endpoint::ALL {
            assert!(endpoint.path().ends_with(".json"), "{endpoint}");
            assert!(!endpoint.path().starts_with('/'), "{endpoint}");
        }
    }
}
