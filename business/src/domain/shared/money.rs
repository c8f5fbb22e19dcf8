//! Conversions between the exact decimal amounts used by the domain and the
//! JSON numbers used on the wire.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Converts a wire amount into a decimal using its shortest round-trip
/// representation, so `19.99` becomes exactly `19.99`.
///
/// Returns `None` for NaN and infinities.
pub fn from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

pub fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAmount {
    Text(String),
    Number(f64),
}

/// Reads an amount written either as a decimal string or as a JSON number.
/// Numbers go through [`from_f64`] so they keep their written digits.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredAmount::deserialize(deserializer)? {
        StoredAmount::Text(raw) => BigDecimal::from_str(raw.trim()).map_err(D::Error::custom),
        StoredAmount::Number(value) => {
            from_f64(value).ok_or_else(|| D::Error::custom("amount is not a finite number"))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "deserialize_amount")]
        price: BigDecimal,
    }

    #[test]
    fn should_convert_wire_amount_without_binary_noise() {
        let amount = from_f64(19.99).unwrap();
        assert_eq!(amount, BigDecimal::from_str("19.99").unwrap());
    }

    #[test]
    fn should_reject_non_finite_amounts() {
        assert!(from_f64(f64::NAN).is_none());
        assert!(from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn should_convert_decimal_back_to_wire_amount() {
        let amount = BigDecimal::from_str("200").unwrap();
        assert_eq!(to_f64(&amount), 200.0);
    }

    #[test]
    fn should_read_fractional_number_without_binary_noise() {
        let priced: Priced = serde_json::from_str(r#"{"price":19.99}"#).unwrap();

        assert_eq!(priced.price, BigDecimal::from_str("19.99").unwrap());
        assert_eq!(priced.price.to_string(), "19.99");
    }

    #[test]
    fn should_read_decimal_string() {
        let priced: Priced = serde_json::from_str(r#"{"price":"12.50"}"#).unwrap();

        assert_eq!(priced.price, BigDecimal::from_str("12.5").unwrap());
    }

    #[test]
    fn should_reject_non_numeric_string() {
        assert!(serde_json::from_str::<Priced>(r#"{"price":"cheap"}"#).is_err());
    }
}
