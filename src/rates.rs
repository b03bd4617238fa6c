//! The per-request rate table returned by the service.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{RateError, Result};

/// Rates of currencies against the service's fixed base currency (the
/// Euro for Fixer.io), as returned by a single request.
///
/// Produced fresh by every fetch and discarded once the caller's query
/// is answered; nothing is cached across calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RateTable(HashMap<String, f64>);

impl RateTable {
    /// Rate for `code`, if the response included it.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    /// Rate for `code`, or [`RateError::CurrencyNotFound`].
    pub fn rate(&self, code: &str) -> Result<f64> {
        self.get(code)
            .ok_or_else(|| RateError::CurrencyNotFound(code.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Wire shape of the service response. Only the `rates` object is read;
/// other fields (`success`, `date`, `base`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RatesResponse {
    pub(crate) rates: RateTable,
}
