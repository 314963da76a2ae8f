//! Conversion abstractions and core types

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub amount_text: String,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(amount_text: impl Into<String>, from: &str, to: &str) -> Self {
        Self {
            amount_text: amount_text.into(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// The converted amount of the target currency for the requested amount of `base`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub base: String,
    pub as_of_date: NaiveDate,
    pub rate_value: f64,
}

#[derive(Debug, Error)]
pub enum RateError {
    #[error("Request error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: {status} for currency pair: {pair}")]
    Status {
        status: reqwest::StatusCode,
        pair: String,
    },
    #[error("Malformed response for {pair}: {reason}")]
    MalformedResponse { pair: String, reason: String },
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

/// Parses user-entered amount text. Empty, non-numeric and non-finite input is rejected.
pub fn parse_amount(text: &str) -> Result<f64, RateError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| RateError::InvalidAmount(text.to_string()))
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, RateError>;
}
