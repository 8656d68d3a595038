use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Real-time quote as returned by a provider.
///
/// Providers are inconsistent about missing data: a closing price can arrive
/// as a number, a numeric string, the string `"NA"`, `null`, or not at all.
/// Anything that is not a finite number decodes to `None` instead of failing
/// the whole payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RealtimeQuote {
    /// Closing/current price
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub close: Option<Decimal>,
}

impl RealtimeQuote {
    /// Create a quote carrying a closing price.
    pub fn with_close(close: Decimal) -> Self {
        Self { close: Some(close) }
    }

    /// The closing price, only if it is strictly positive.
    pub fn positive_close(&self) -> Option<Decimal> {
        self.close.filter(|close| close.is_sign_positive() && !close.is_zero())
    }
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(json: &str) -> RealtimeQuote {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_numeric_close() {
        let quote = parse(r#"{"code":"OGDC.KSE","timestamp":1700000000,"close":120.5}"#);
        assert_eq!(quote.close, Some(dec!(120.5)));
        assert_eq!(quote.positive_close(), Some(dec!(120.5)));
    }

    #[test]
    fn test_string_close() {
        let quote = parse(r#"{"close":" 45000 "}"#);
        assert_eq!(quote.close, Some(dec!(45000)));
    }

    #[test]
    fn test_scientific_close() {
        let quote = parse(r#"{"close":1.5e3}"#);
        assert_eq!(quote.close, Some(dec!(1500)));
    }

    #[test]
    fn test_not_available_close() {
        let quote = parse(r#"{"code":"XYZ.KSE","close":"NA"}"#);
        assert_eq!(quote.close, None);
        assert_eq!(quote.positive_close(), None);
    }

    #[test]
    fn test_missing_and_null_close() {
        assert_eq!(parse(r#"{}"#).close, None);
        assert_eq!(parse(r#"{"close":null}"#).close, None);
        assert_eq!(parse(r#"{"close":[1]}"#).close, None);
    }

    #[test]
    fn test_positive_close_rejects_zero_and_negative() {
        assert_eq!(RealtimeQuote::with_close(dec!(0)).positive_close(), None);
        assert_eq!(RealtimeQuote::with_close(dec!(-1.25)).positive_close(), None);
        assert_eq!(
            RealtimeQuote::with_close(dec!(0.01)).positive_close(),
            Some(dec!(0.01))
        );
    }
}
