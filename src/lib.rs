//! A thin client for historical currency exchange rates served as JSON
//! over HTTP, in the shape of the [Fixer.io](https://fixer.io) API.
//!
//! Construct a [`RateClient`] from a base URL and an
//! [access key source](credentials::AccessKeySource), then ask for the
//! rate of a currency against the service's base currency or between
//! two currencies on a given date:
//!
//! ```no_run
//! # async fn demo() -> Result<(), xrate::RateError> {
//! use xrate::{RateClient, credentials::EnvVar};
//!
//! let client = RateClient::new("http://data.fixer.io/api/", &EnvVar::default())?;
//! let usd_per_eur = client.rate_against_base("USD", 2010, 6, 25).await?;
//! let usd_in_gbp = client.rate_between("USD", "GBP", 2010, 6, 25).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod rates;

pub use client::RateClient;
pub use error::{RateError, Result};
pub use rates::RateTable;
