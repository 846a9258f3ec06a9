/*
[INPUT]:  OKX API schema definitions and serde requirements
[OUTPUT]: Typed Rust response envelopes with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::models::{BalanceEntry, serde_helpers};

/// Standard OKX response envelope: `{code, msg, data: [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<Vec<T>>,
}

impl<T> ApiResponse<T> {
    /// A missing code counts as success; any other value must be zero
    pub fn is_success(&self) -> bool {
        self.code.is_none_or(|code| code == 0)
    }

    pub fn into_first(self) -> Option<T> {
        self.data.and_then(|data| data.into_iter().next())
    }
}

/// Top-level `code` of a raw response, accepting `"0"` as well as `0`
pub fn response_code(value: &Value) -> Option<i64> {
    value.get("code").and_then(code_from_value)
}

fn code_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    // Unparseable codes are reported as a non-zero failure rather than dropped.
    Ok(Some(code_from_value(&value).unwrap_or(-1)))
}

/// First element of the account balance `data` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountBalance {
    #[serde(default, deserialize_with = "deserialize_code")]
    pub code: Option<i64>,
    pub details: Vec<BalanceDetail>,
}

/// Per-currency record inside `details`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceDetail {
    pub ccy: String,
    #[serde(
        rename = "availEq",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub avail_eq: Decimal,
    #[serde(
        rename = "eqUsd",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero"
    )]
    pub eq_usd: Decimal,
}

impl From<BalanceDetail> for BalanceEntry {
    fn from(detail: BalanceDetail) -> Self {
        Self {
            ccy: detail.ccy,
            avail: detail.avail_eq,
            eq_usd: detail.eq_usd,
        }
    }
}

/// First element of the order book `data` array, levels still untrimmed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawOrderbook {
    pub asks: Option<Vec<Vec<Value>>>,
    pub bids: Option<Vec<Vec<Value>>>,
}
