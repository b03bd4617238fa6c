//! Error taxonomy for the exchange rate client.

use thiserror::Error;

/// Failures surfaced by [`RateClient`](crate::RateClient) operations.
///
/// Nothing is retried or suppressed; every failure propagates to the
/// direct caller.
#[derive(Debug, Error)]
pub enum RateError {
    /// The credential source was missing, unreadable, or lacked the
    /// expected access key. Raised at construction time only.
    #[error("configuration error: {reason}")]
    Configuration {
        /// What went wrong while resolving the access key.
        reason: String,
        /// The underlying I/O failure, when there was one.
        #[source]
        source: Option<std::io::Error>,
    },

    /// The HTTP request could not be sent, returned a non-success
    /// status, the body could not be read, or the body was not the
    /// expected JSON shape (an object holding a `rates` object of
    /// currency-to-number entries).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The requested currency code was absent from the `rates` object.
    #[error("currency not found in response: {0}")]
    CurrencyNotFound(String),

    /// The divisor currency's rate was exactly zero, so the cross rate
    /// is undefined.
    #[error("rate for {0} is zero, cross rate is undefined")]
    ZeroRate(String),
}

impl RateError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        RateError::Configuration {
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn configuration_io(reason: impl Into<String>, source: std::io::Error) -> Self {
        RateError::Configuration {
            reason: reason.into(),
            source: Some(source),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RateError>;
