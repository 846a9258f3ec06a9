/*
[INPUT]:  OKX API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `tdMode` field of an order; batches are always placed in cash mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeMode {
    Cash,
}

/// `ordType` field of an order; only limit orders are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
}

/// Account codes accepted by the asset transfer endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "6")]
    Funding,
    #[serde(rename = "18")]
    Trading,
}

impl AccountType {
    pub fn code(&self) -> &'static str {
        match self {
            AccountType::Funding => "6",
            AccountType::Trading => "18",
        }
    }
}

impl AsRef<str> for AccountType {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), r#""sell""#);
        assert_eq!(serde_json::to_string(&TradeMode::Cash).unwrap(), r#""cash""#);
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), r#""limit""#);
        assert_eq!(serde_json::to_string(&AccountType::Trading).unwrap(), r#""18""#);
    }

    #[test]
    fn test_account_codes() {
        assert_eq!(AccountType::Funding.as_ref(), "6");
        assert_eq!(AccountType::Trading.code(), "18");
        assert_eq!(Side::Buy.to_string(), "buy");
    }
}
