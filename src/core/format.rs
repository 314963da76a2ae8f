//! Display helpers for a conversion result.

use super::currency::CurrencyRecord;
use super::rate::ConversionResult;

pub const ATTRIBUTION_NOTICE: &str =
    "The free version of this API won't provide all the country information";

/// A rate split for differential styling: prominent integer part and first two
/// decimals, de-emphasized tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    pub integer_part: String,
    pub first_two_decimals: Option<String>,
    pub remaining_decimals: Option<String>,
}

impl Decomposition {
    /// The prominent part, e.g. `92.34`.
    pub fn head(&self) -> String {
        match &self.first_two_decimals {
            Some(decimals) => format!("{}.{}", self.integer_part, decimals),
            None => self.integer_part.clone(),
        }
    }

    pub fn tail(&self) -> &str {
        self.remaining_decimals.as_deref().unwrap_or_default()
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Splits the shortest decimal rendering of `rate_value` at the decimal point.
/// The rendering is always plain notation, never exponent form.
///
/// The tail is the slice from the third fractional digit up to, but excluding,
/// the last one. The final digit is dropped as-is, never rounded.
pub fn decompose(rate_value: f64) -> Decomposition {
    let text = rate_value.to_string();
    let Some((integer_part, fraction)) = text.split_once('.') else {
        return Decomposition {
            integer_part: text,
            first_two_decimals: None,
            remaining_decimals: None,
        };
    };

    let first_two = fraction.get(..2).unwrap_or(fraction);
    let remaining = fraction
        .get(2..fraction.len().saturating_sub(1))
        .unwrap_or_default();

    Decomposition {
        integer_part: integer_part.to_string(),
        first_two_decimals: non_empty(first_two),
        remaining_decimals: non_empty(remaining),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitRates {
    pub forward_value: f64,
    pub backward_value: f64,
    pub forward: String,
    pub backward: String,
}

/// `1 from = rate/amount to` and `1 to = amount/rate from`.
///
/// A zero amount or rate yields a non-finite value which is rendered verbatim.
pub fn unit_rates(amount: f64, rate_value: f64, from: &str, to: &str) -> UnitRates {
    let forward_value = rate_value / amount;
    let backward_value = amount / rate_value;
    UnitRates {
        forward_value,
        backward_value,
        forward: format!("1 {from} = {forward_value} {to}"),
        backward: format!("1 {to} = {backward_value} {from}"),
    }
}

/// Everything the summary area shows for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub headline: String,
    pub converted: Decomposition,
    pub to_name: String,
    pub unit_rates: UnitRates,
    pub footer: String,
}

impl Summary {
    /// Returns `None` while the amount is empty, the summary is hidden then.
    pub fn build(
        amount_text: &str,
        from: &CurrencyRecord,
        to: &CurrencyRecord,
        result: &ConversionResult,
    ) -> Option<Self> {
        if amount_text.trim().is_empty() {
            return None;
        }
        let amount = amount_text.trim().parse::<f64>().unwrap_or(f64::NAN);

        Some(Self {
            headline: format!("{} {} =", amount_text.trim(), from.name),
            converted: decompose(result.rate_value),
            to_name: to.name.to_string(),
            unit_rates: unit_rates(amount, result.rate_value, from.code, to.code),
            footer: format!(
                "{} to {} conversion - Last updated {}",
                from.name,
                to.name,
                result.as_of_date.format("%Y-%m-%d")
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::Catalog;
    use chrono::NaiveDate;

    #[test]
    fn test_decompose_integer_value() {
        let d = decompose(92.0);
        assert_eq!(d.integer_part, "92");
        assert!(d.first_two_decimals.is_none());
        assert!(d.remaining_decimals.is_none());
        assert_eq!(d.head(), "92");
        assert_eq!(d.tail(), "");
    }

    #[test]
    fn test_decompose_drops_last_digit_of_tail() {
        let d = decompose(123.4567);
        assert_eq!(d.integer_part, "123");
        assert_eq!(d.first_two_decimals.as_deref(), Some("45"));
        assert_eq!(d.remaining_decimals.as_deref(), Some("6"));
    }

    #[test]
    fn test_decompose_short_fractions() {
        let d = decompose(92.34);
        assert_eq!(d.head(), "92.34");
        assert!(d.remaining_decimals.is_none());

        let d = decompose(0.5);
        assert_eq!(d.integer_part, "0");
        assert_eq!(d.first_two_decimals.as_deref(), Some("5"));
        assert!(d.remaining_decimals.is_none());

        // Three fractional digits: the third is the last one and gets dropped.
        let d = decompose(1.234);
        assert_eq!(d.first_two_decimals.as_deref(), Some("23"));
        assert!(d.remaining_decimals.is_none());

        let d = decompose(1.0829542993285683);
        assert_eq!(d.first_two_decimals.as_deref(), Some("08"));
        assert_eq!(d.remaining_decimals.as_deref(), Some("2954299328568"));
    }

    #[test]
    fn test_decompose_uses_plain_notation_at_extremes() {
        // Rust never switches to exponent notation, so tiny and huge rates
        // still split at a decimal point (or have none at all).
        let d = decompose(1e-7);
        assert_eq!(d.integer_part, "0");
        assert_eq!(d.first_two_decimals.as_deref(), Some("00"));
        assert_eq!(d.remaining_decimals.as_deref(), Some("0000"));

        let d = decompose(1e21);
        assert_eq!(d.integer_part, "1000000000000000000000");
        assert!(d.first_two_decimals.is_none());
        assert!(d.remaining_decimals.is_none());
    }

    #[test]
    fn test_decompose_non_finite_passes_through() {
        assert_eq!(decompose(f64::NAN).integer_part, "NaN");
        assert_eq!(decompose(f64::INFINITY).integer_part, "inf");
    }

    #[test]
    fn test_unit_rates() {
        let rates = unit_rates(100.0, 92.34, "USD", "EUR");
        assert_eq!(rates.forward, "1 USD = 0.9234 EUR");
        assert!(rates.backward.starts_with("1 EUR = 1.0829"));
        assert!(rates.backward.ends_with(" USD"));
    }

    #[test]
    fn test_unit_rates_round_trip() {
        for (amount, rate) in [(1.0, 0.5), (100.0, 92.34), (3.5, 7000.25), (0.01, 0.0001)] {
            let rates = unit_rates(amount, rate, "A", "B");
            assert!((rates.forward_value * amount - rate).abs() < 1e-9 * rate.max(1.0));
            assert!((rates.backward_value * rate - amount).abs() < 1e-9 * amount.max(1.0));
        }
    }

    #[test]
    fn test_unit_rates_zero_amount_is_not_guarded() {
        let rates = unit_rates(0.0, 92.34, "USD", "EUR");
        assert!(rates.forward_value.is_infinite());
        assert_eq!(rates.forward, "1 USD = inf EUR");
        assert_eq!(rates.backward_value, 0.0);
    }

    #[test]
    fn test_summary_build() {
        let catalog = Catalog::new();
        let usd = catalog.find("USD").unwrap();
        let eur = catalog.find("EUR").unwrap();
        let result = ConversionResult {
            base: "USD".to_string(),
            as_of_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            rate_value: 92.34,
        };

        assert!(Summary::build("", usd, eur, &result).is_none());

        let summary = Summary::build("100", usd, eur, &result).unwrap();
        assert_eq!(summary.headline, "100 United States Dollar =");
        assert_eq!(summary.converted.integer_part, "92");
        assert_eq!(summary.converted.first_two_decimals.as_deref(), Some("34"));
        assert_eq!(summary.unit_rates.forward, "1 USD = 0.9234 EUR");
        assert_eq!(
            summary.footer,
            "United States Dollar to Euro conversion - Last updated 2024-01-01"
        );
    }
}
