//! The exchange rate client.

use std::time::Duration;

use tracing::{debug, warn};

use crate::credentials::AccessKeySource;
use crate::error::{RateError, Result};
use crate::rates::{RateTable, RatesResponse};

/// Request timeout applied to every fetch. The service contract has no
/// timeout; this is a safety margin so a dead connection cannot block
/// the caller forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a historical exchange rate service.
///
/// Holds a base URL and an access key, both set at construction and
/// never mutated, so one instance can be shared across tasks freely.
/// Rates for a specific day are fetched from the URL formed by
/// appending `YYYY-MM-DD` and the access key to the base URL; the URL
/// for 25 June 2010 with base `http://api.example.com/api/` would be
/// `http://api.example.com/api/2010-06-25?access_key=...`.
///
/// Each query is one independent request/response cycle. Nothing is
/// cached, retried, or kept across calls.
pub struct RateClient {
    base_url: String,
    access_key: String,
    http: reqwest::Client,
}

/// Zero-pads a month or day-of-month to two digits. Values of 100 and
/// above pass through as plain decimal.
fn format_date_part(n: u32) -> String {
    if n < 10 { format!("0{n}") } else { n.to_string() }
}

impl RateClient {
    /// Creates a client for the service at `base_url`, resolving the
    /// access key from `source` immediately.
    ///
    /// Fails with [`RateError::Configuration`] when the source cannot
    /// produce a key; a client never exists without one.
    pub fn new(base_url: &str, source: &dyn AccessKeySource) -> Result<Self> {
        let access_key = source.access_key()?;
        let http = reqwest::Client::builder()
            .user_agent("xrate/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(RateClient {
            base_url: base_url.to_string(),
            access_key,
            http,
        })
    }

    /// Rate of `currency_code` against the service's fixed base
    /// currency (the Euro) on the given date.
    ///
    /// Fails with [`RateError::Network`] when the request or response
    /// is broken and [`RateError::CurrencyNotFound`] when the response
    /// does not list `currency_code`.
    pub async fn rate_against_base(
        &self,
        currency_code: &str,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<f64> {
        let url = self.request_url(year, month, day);
        let rates = self.fetch_rates(&url).await?;
        rates.rate(currency_code)
    }

    /// Rate of `from` against `to` on the given date, i.e. the value of
    /// one unit of `from` in units of `to`.
    ///
    /// Both currencies are read from a single response, so this costs
    /// one HTTP request. Fails with [`RateError::ZeroRate`] when `to`'s
    /// rate is exactly zero, since the cross rate is then undefined.
    pub async fn rate_between(
        &self,
        from: &str,
        to: &str,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<f64> {
        let url = self.request_url(year, month, day);
        let rates = self.fetch_rates(&url).await?;
        let from_rate = rates.rate(from)?;
        let to_rate = rates.rate(to)?;
        if to_rate == 0.0 {
            return Err(RateError::ZeroRate(to.to_string()));
        }
        Ok(from_rate / to_rate)
    }

    fn request_url(&self, year: i32, month: u32, day: u32) -> String {
        format!(
            "{}{}-{}-{}?access_key={}",
            self.base_url,
            year,
            format_date_part(month),
            format_date_part(day),
            self.access_key
        )
    }

    async fn fetch_rates(&self, url: &str) -> Result<RateTable> {
        debug!("Requesting rates from {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            RateError::from(e)
        })?;

        let response = response.error_for_status().map_err(|e| {
            warn!("Rate service returned an error status: {}", e);
            RateError::from(e)
        })?;

        let payload = response.json::<RatesResponse>().await.map_err(|e| {
            warn!("Could not parse rates response: {}", e);
            RateError::from(e)
        })?;

        debug!("Received {} rates", payload.rates.len());
        Ok(payload.rates)
    }
}
