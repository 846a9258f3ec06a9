/*
[INPUT]:  OKX API schema definitions and serde requirements
[OUTPUT]: Normalized domain structs (orders, balances, order books)
[POS]:    Data layer - type definitions returned to callers
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One resting order level: `(price, volume)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order(
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub Decimal,
);

impl Order {
    pub fn new(price: Decimal, volume: Decimal) -> Self {
        Self(price, volume)
    }

    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn volume(&self) -> Decimal {
        self.1
    }
}

/// Available balance of one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub ccy: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub avail: Decimal,
    #[serde(
        rename = "eqUsd",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub eq_usd: Decimal,
}

/// Order book snapshot trimmed to `(price, volume)` levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orderbook {
    pub asks: Vec<Order>,
    pub bids: Vec<Order>,
    // Never filled by get_market; callers may attach a balance themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<BalanceEntry>,
}

pub(crate) mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    /// Parse a JSON string or number into a decimal
    pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
        match value {
            Value::String(raw) => Decimal::from_str(raw.trim()).ok(),
            Value::Number(number) => Decimal::from_str(&number.to_string())
                .or_else(|_| Decimal::from_scientific(&number.to_string()))
                .ok(),
            _ => None,
        }
    }

    pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decimal_from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid decimal value: {value}")))
    }

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }
        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
        }
        decimal_from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid decimal value: {value}")))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn order_accepts_strings_and_numbers() {
        let from_strings: Order = serde_json::from_value(json!(["0.9", "3"])).unwrap();
        let from_numbers: Order = serde_json::from_value(json!([0.9, 3])).unwrap();
        assert_eq!(from_strings, from_numbers);
        assert_eq!(from_numbers.price(), dec("0.9"));
        assert_eq!(from_numbers.volume(), dec("3"));
    }

    #[test]
    fn order_serializes_as_pair() {
        let order = Order::new(dec("1.25"), dec("2"));
        assert_eq!(serde_json::to_value(order).unwrap(), json!(["1.25", "2"]));
    }

    #[test]
    fn balance_entry_uses_eq_usd_wire_name() {
        let entry = BalanceEntry {
            ccy: "BTC".to_string(),
            avail: dec("1.5"),
            eq_usd: dec("50000"),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "ccy": "BTC", "avail": "1.5", "eqUsd": "50000" })
        );
    }

    #[test]
    fn balance_entry_treats_blank_as_zero() {
        let entry: BalanceEntry =
            serde_json::from_value(json!({ "ccy": "ETH", "avail": "", "eqUsd": null })).unwrap();
        assert_eq!(entry.avail, Decimal::ZERO);
        assert_eq!(entry.eq_usd, Decimal::ZERO);
    }

    #[test]
    fn orderbook_omits_missing_balance() {
        let book = Orderbook {
            asks: vec![Order::new(dec("1"), dec("2"))],
            bids: vec![],
            balance: None,
        };
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({ "asks": [["1", "2"]], "bids": [] })
        );
    }
}
