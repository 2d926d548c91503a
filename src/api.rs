use crate::holiday::{Holiday, HolidaysResponse};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("holiday request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("holiday service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("could not parse holiday response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where and as whom to talk to the holiday service. Injected into the
/// client at construction; the API key is sourced from the environment at
/// startup and never baked into the binary.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub country: String,
}

/// Blocking client for the holiday service. One best-effort request per
/// call; no retries and no caching across invocations.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    http: reqwest::blocking::Client,
    config: ApiConfig,
}

impl HolidayClient {
    pub fn new(config: ApiConfig) -> HolidayClient {
        HolidayClient {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    pub fn country(&self) -> &str {
        &self.config.country
    }

    /// Fetch all holidays of `year` for the configured country.
    ///
    /// A payload without the nested `response.holidays` field decodes to an
    /// empty list rather than an error; the service answers that way for
    /// years it has no data for.
    pub fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, Error> {
        let url = format!("{}/holidays", self.config.base_url);

        log::debug!("requesting holidays for {} {}", self.config.country, year);

        let year_param = year.to_string();
        let response = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("country", self.config.country.as_str()),
                ("year", year_param.as_str()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        let payload: HolidaysResponse = serde_json::from_str(&response.text()?)?;

        log::info!(
            "holiday service returned {} holidays for {} {} (meta code {})",
            payload.response.holidays.len(),
            self.config.country,
            year,
            payload.meta.code
        );

        Ok(payload.response.holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_exposes_configured_country() {
        let client = HolidayClient::new(ApiConfig {
            base_url: "http://localhost".to_owned(),
            api_key: "secret".to_owned(),
            country: "BR".to_owned(),
        });
        assert_eq!(client.country(), "BR");
    }
}

