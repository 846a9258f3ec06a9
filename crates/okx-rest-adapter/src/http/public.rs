/*
[INPUT]:  Instrument identifier and book depth
[OUTPUT]: Order book trimmed to (price, volume) levels
[POS]:    HTTP layer - market data endpoints
[UPDATE]: When adding new market endpoints or changing response format
*/

use serde_json::Value;

use crate::http::{ExchangeError, ExchangeResult, OkxClient, OkxError, Result};
use crate::types::models::serde_helpers::decimal_from_value;
use crate::types::{Order, Orderbook, RawOrderbook};

const BOOKS_PATH: &str = "/api/v5/market/books";

impl OkxClient {
    /// Query order book depth
    ///
    /// GET /api/v5/market/books?instId={inst_id}&sz={depth}
    ///
    /// Each level is cut down to its first two fields; extra fields such as
    /// the order count are dropped.
    pub async fn get_market(&self, inst_id: &str, depth: u32) -> ExchangeResult<Orderbook> {
        self.fetch_market(inst_id, depth)
            .await
            .map_err(|err| ExchangeError::from_failure("get_market", err))
    }

    async fn fetch_market(&self, inst_id: &str, depth: u32) -> Result<Orderbook> {
        let query = [("instId", inst_id.to_string()), ("sz", depth.to_string())];
        let first = self.fetch_first(BOOKS_PATH, &query).await?;
        let raw: RawOrderbook = serde_json::from_value(first)?;

        let (Some(asks), Some(bids)) = (raw.asks, raw.bids) else {
            return Err(OkxError::InvalidResponse(
                "order book is missing asks or bids".to_string(),
            ));
        };

        Ok(Orderbook {
            asks: trim_levels(&asks)?,
            bids: trim_levels(&bids)?,
            balance: None,
        })
    }
}

fn trim_levels(levels: &[Vec<Value>]) -> Result<Vec<Order>> {
    levels.iter().map(|level| trim_level(level)).collect()
}

fn trim_level(level: &[Value]) -> Result<Order> {
    match level {
        [price, volume, ..] => {
            let parse = |value: &Value| {
                decimal_from_value(value)
                    .ok_or_else(|| OkxError::InvalidResponse(format!("invalid book value {value}")))
            };
            Ok(Order::new(parse(price)?, parse(volume)?))
        }
        _ => Err(OkxError::InvalidResponse(format!(
            "book level has {} fields, expected at least 2",
            level.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::http::ClientConfig;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    fn client_for(server: &MockServer) -> OkxClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        OkxClient::with_config(Credentials::new("key", "secret", "pass"), config)
            .expect("client init")
    }

    async fn mount_book(server: &MockServer, book: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/v5/market/books"))
            .and(query_param("instId", "TON-USDT"))
            .and(query_param("sz", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "0",
                "msg": "",
                "data": [book]
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_get_market_drops_extra_fields() {
        let server = MockServer::start().await;
        mount_book(&server, json!({ "asks": [[1, 2, 99]], "bids": [[0.9, 3, 50]], "ts": "1" })).await;

        let book = client_for(&server)
            .get_market("TON-USDT", 5)
            .await
            .expect("get_market");
        assert_eq!(book.asks, vec![Order::new(dec("1"), dec("2"))]);
        assert_eq!(book.bids, vec![Order::new(dec("0.9"), dec("3"))]);
        assert_eq!(book.balance, None);
    }

    #[tokio::test]
    async fn test_get_market_okx_string_levels() {
        let server = MockServer::start().await;
        mount_book(
            &server,
            json!({
                "asks": [["2.105", "41", "0", "3"], ["2.106", "7.5", "0", "1"]],
                "bids": [["2.104", "12", "0", "2"]]
            }),
        )
        .await;

        let book = client_for(&server).get_market("TON-USDT", 5).await.unwrap();
        assert_eq!(book.asks.len(), 2);
        assert_eq!(book.asks[1], Order::new(dec("2.106"), dec("7.5")));
        assert_eq!(book.bids[0].price(), dec("2.104"));
    }

    #[tokio::test]
    async fn test_get_market_missing_bids() {
        let server = MockServer::start().await;
        mount_book(&server, json!({ "asks": [[1, 2, 99]] })).await;

        let err = client_for(&server).get_market("TON-USDT", 5).await.unwrap_err();
        assert_eq!(err.code, -1);
        assert_eq!(err.ex, "OKX");
        assert!(err.error.starts_with("get_market"));
    }

    #[tokio::test]
    async fn test_get_market_short_level() {
        let server = MockServer::start().await;
        mount_book(&server, json!({ "asks": [[1]], "bids": [] })).await;

        let err = client_for(&server).get_market("TON-USDT", 5).await.unwrap_err();
        assert_eq!(err.code, -1);
    }

    #[test]
    fn test_trim_level() {
        let order = trim_level(&[json!("1.5"), json!(2), json!("ignored")]).unwrap();
        assert_eq!(order, Order::new(dec("1.5"), dec("2")));
        assert!(trim_level(&[json!(null), json!(1)]).is_err());
    }
}
