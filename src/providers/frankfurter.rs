use crate::core::currency::Catalog;
use crate::core::rate::{
    ConversionRequest, ConversionResult, RateError, RateProvider, parse_amount,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

const USER_AGENT: &str = concat!("fxw/", env!("CARGO_PKG_VERSION"));

// FrankfurterProvider implementation for RateProvider
pub struct FrankfurterProvider {
    base_url: String,
    timeout: Option<Duration>,
    catalog: Catalog,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        FrankfurterProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            catalog: Catalog::new(),
        }
    }

    fn check_currency(&self, code: &str) -> Result<(), RateError> {
        if self.catalog.contains(code) {
            Ok(())
        } else {
            Err(RateError::UnsupportedCurrency(code.to_string()))
        }
    }
}

#[derive(Debug, Deserialize)]
struct FrankfurterLatestResponse {
    base: String,
    date: String,
    rates: Option<HashMap<String, f64>>,
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    #[instrument(
        name = "FrankfurterConvert",
        skip(self, request),
        fields(amount = %request.amount_text, from = %request.from, to = %request.to)
    )]
    async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, RateError> {
        let amount = parse_amount(&request.amount_text)?;
        self.check_currency(&request.from)?;
        self.check_currency(&request.to)?;

        let from = request.from.to_uppercase();
        let to = request.to.to_uppercase();
        let pair = format!("{from}-{to}");

        // The service refuses identical currencies.
        if from == to {
            debug!("Identity conversion for {}", pair);
            return Ok(ConversionResult {
                base: from,
                as_of_date: chrono::Local::now().date_naive(),
                rate_value: amount,
            });
        }

        let url = format!("{}/latest", self.base_url);
        // Parsed amount, not the raw text: `+5` would decode to ` 5`.
        let query = [
            ("amount", amount.to_string()),
            ("from", from.clone()),
            ("to", to.clone()),
        ];
        debug!(?query, "Requesting conversion from {}", url);

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let response = client.get(&url).query(&query).send().await?;
        debug!(response = ?response, "Received Frankfurter response");

        if !response.status().is_success() {
            return Err(RateError::Status {
                status: response.status(),
                pair,
            });
        }

        let text = response.text().await?;
        let malformed = |reason: String| RateError::MalformedResponse {
            pair: pair.clone(),
            reason,
        };

        let data: FrankfurterLatestResponse =
            serde_json::from_str(&text).map_err(|e| malformed(e.to_string()))?;

        let rate_value = data
            .rates
            .as_ref()
            .ok_or_else(|| malformed("missing rates".to_string()))?
            .get(&to)
            .copied()
            .ok_or_else(|| malformed(format!("no rate for {to}")))?;

        let as_of_date = NaiveDate::parse_from_str(&data.date, "%Y-%m-%d")
            .map_err(|e| malformed(format!("invalid date {:?}: {e}", data.date)))?;

        Ok(ConversionResult {
            base: data.base,
            as_of_date,
            rate_value,
        })
    }
}
