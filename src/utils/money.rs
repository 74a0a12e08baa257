use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Number;
use std::str::FromStr;

/// Rounds to whole cents, half away from zero (`0.005 -> 0.01`, `-0.005 -> -0.01`).
pub fn round_currency(amount: &BigDecimal) -> BigDecimal {
    let cents = amount.clone() * BigDecimal::from(100);
    let half = BigDecimal::new(BigInt::from(5), 1);
    let nudged = if cents < BigDecimal::from(0) {
        cents - half
    } else {
        cents + half
    };
    // with_scale(0) truncates toward zero
    let (whole_cents, _) = nudged.with_scale(0).into_bigint_and_exponent();
    BigDecimal::new(whole_cents, 2)
}

pub fn from_json_number(number: &Number) -> Option<BigDecimal> {
    BigDecimal::from_str(&number.to_string()).ok()
}

/// Serializes money as a JSON number rather than bigdecimal's string form.
pub mod as_number {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(amount: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        match amount.to_string().parse::<f64>() {
            Ok(value) => serializer.serialize_f64(value),
            Err(_) => serializer.serialize_str(&amount.to_string()),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let number = Number::deserialize(deserializer)?;
        from_json_number(&number)
            .ok_or_else(|| D::Error::custom(format!("'{}' is not a valid amount", number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    fn decimal(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_currency(&decimal("2.345")).to_string(), "2.35");
        assert_eq!(round_currency(&decimal("2.344")).to_string(), "2.34");
        assert_eq!(round_currency(&decimal("0.005")).to_string(), "0.01");
        assert_eq!(round_currency(&decimal("-0.005")).to_string(), "-0.01");
        assert_eq!(round_currency(&decimal("-2.344")).to_string(), "-2.34");
    }

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(round_currency(&BigDecimal::from(35)).to_string(), "35.00");
        assert_eq!(round_currency(&decimal("12.5")).to_string(), "12.50");
    }

    #[test]
    fn parses_json_numbers_exactly() {
        let price = from_json_number(&Number::from_f64(12.99).unwrap()).unwrap();
        assert_eq!(price, decimal("12.99"));
        assert_eq!(from_json_number(&Number::from(7)).unwrap(), BigDecimal::from(7));
    }

    #[derive(Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "as_number")]
        price: BigDecimal,
    }

    #[test]
    fn money_travels_as_a_number() {
        let priced = Priced {
            price: decimal("12.99"),
        };
        assert_eq!(serde_json::to_value(&priced).unwrap(), json!({ "price": 12.99 }));

        let parsed: Priced = serde_json::from_value(json!({ "price": 4.5 })).unwrap();
        assert_eq!(parsed.price, decimal("4.50"));
    }
}
