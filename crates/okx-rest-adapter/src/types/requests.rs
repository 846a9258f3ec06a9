/*
[INPUT]:  OKX API schema definitions and serde requirements
[OUTPUT]: Typed Rust request bodies with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side, TradeMode};

/// One entry of a `POST /api/v5/trade/batch-orders` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub inst_id: String,
    pub td_mode: TradeMode,
    pub side: Side,
    pub ord_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub px: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub sz: Decimal,
}

impl PlaceOrderRequest {
    /// Spot limit order in cash mode
    pub fn cash_limit(inst_id: &str, side: Side, price: Decimal, volume: Decimal) -> Self {
        Self {
            inst_id: inst_id.to_string(),
            td_mode: TradeMode::Cash,
            side,
            ord_type: OrderType::Limit,
            px: price,
            sz: volume,
        }
    }
}

/// Body of `POST /api/v5/asset/transfer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub ccy: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amt: Decimal,
    pub from: String,
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn place_order_field_order_and_names() {
        let order = PlaceOrderRequest::cash_limit(
            "TON-USDT",
            Side::Buy,
            Decimal::from_str("1.5").unwrap(),
            Decimal::from(2),
        );
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"instId":"TON-USDT","tdMode":"cash","side":"buy","ordType":"limit","px":"1.5","sz":"2"}"#
        );
    }

    #[test]
    fn transfer_field_order() {
        let req = TransferRequest {
            ccy: "USDT".to_string(),
            amt: Decimal::from(10),
            from: "6".to_string(),
            to: "18".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"ccy":"USDT","amt":"10","from":"6","to":"18"}"#
        );
    }
}
