/*
[INPUT]:  Instrument, side and (price, volume) pairs
[OUTPUT]: Acceptance flag for a batch of limit orders
[POS]:    HTTP layer - trading endpoints (signed body)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use tracing::info;

use crate::http::{ExchangeError, ExchangeResult, OkxClient};
use crate::types::{Order, PlaceOrderRequest, Side, response_code};

const BATCH_ORDERS_PATH: &str = "/api/v5/trade/batch-orders";

impl OkxClient {
    /// Place up to `count` cash-mode limit orders in one batch.
    ///
    /// POST /api/v5/trade/batch-orders
    ///
    /// Entries of `orders` past `count` are ignored. Returns `Ok(true)` only
    /// when the exchange answers with code `0`; any other code is `Ok(false)`.
    /// A request that could not complete is an `Err`.
    pub async fn put_orders(
        &self,
        market: &str,
        side: Side,
        count: usize,
        orders: &[Order],
    ) -> ExchangeResult<bool> {
        let batch: Vec<PlaceOrderRequest> = orders
            .iter()
            .take(count)
            .map(|order| PlaceOrderRequest::cash_limit(market, side, order.price(), order.volume()))
            .collect();

        let response = self
            .submit(BATCH_ORDERS_PATH, &batch)
            .await
            .map_err(|err| ExchangeError::from_failure("put_orders", err))?;

        let code = response_code(&response);
        info!(market, %side, orders = batch.len(), ?code, "okx batch orders submitted");
        Ok(code == Some(0))
    }
}
