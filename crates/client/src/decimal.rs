//! Lenient decimal decoding.
//!
//! The upstream sends amounts as JSON numbers, numeric strings, formatted
//! strings such as `"RWF 1,500.00"`, or `null`. All of them become a
//! `Decimal`; anything unparseable becomes zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Serde adapter for amount fields. Pair with `#[serde(default)]` so a
/// missing field is zero too.
pub fn lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(Decimal::ZERO, from_value))
}

/// Converts any JSON value to a decimal.
#[must_use]
pub fn from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => {
            let raw = n.to_string();
            raw.parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&raw))
                .unwrap_or(Decimal::ZERO)
        }
        Value::String(s) => parse_str(s),
        _ => Decimal::ZERO,
    }
}

/// Parses a formatted amount, keeping only digits, `.` and `-`.
#[must_use]
pub fn parse_str(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Amount {
        #[serde(default, deserialize_with = "lenient")]
        amount: Decimal,
    }

    #[rstest]
    #[case(json!({"amount": 1500}), dec!(1500))]
    #[case(json!({"amount": 12.5}), dec!(12.5))]
    #[case(json!({"amount": "3000.00"}), dec!(3000))]
    #[case(json!({"amount": "1,500.00"}), dec!(1500))]
    #[case(json!({"amount": "RWF 300"}), dec!(300))]
    #[case(json!({"amount": "-42.10"}), dec!(-42.1))]
    #[case(json!({"amount": null}), Decimal::ZERO)]
    #[case(json!({}), Decimal::ZERO)]
    #[case(json!({"amount": "n/a"}), Decimal::ZERO)]
    #[case(json!({"amount": true}), Decimal::ZERO)]
    fn test_lenient_amounts(#[case] body: Value, #[case] expected: Decimal) {
        let parsed: Amount = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.amount, expected);
    }

    #[test]
    fn test_parse_str_rejects_garbage_after_cleaning() {
        assert_eq!(parse_str("1.2.3"), Decimal::ZERO);
        assert_eq!(parse_str(""), Decimal::ZERO);
    }
}
