/*
[INPUT]:  Account queries and transfer parameters
[OUTPUT]: Balance entries and raw transfer responses
[POS]:    HTTP layer - account and asset endpoints (signed)
[UPDATE]: When adding new account endpoints or changing response mapping
*/

// ### Account Endpoints

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{ExchangeError, ExchangeResult, OkxClient, OkxError, Result};
use crate::types::{AccountBalance, BalanceEntry, TransferRequest};

const BALANCE_PATH: &str = "/api/v5/account/balance";
const TRANSFER_PATH: &str = "/api/v5/asset/transfer";

impl OkxClient {
    /// Query per-currency available balances
    ///
    /// GET /api/v5/account/balance
    pub async fn get_balance(&self) -> ExchangeResult<Vec<BalanceEntry>> {
        self.fetch_balance()
            .await
            .map_err(|err| ExchangeError::from_failure("get_balance", err))
    }

    async fn fetch_balance(&self) -> Result<Vec<BalanceEntry>> {
        let first = self.fetch_first(BALANCE_PATH, &[]).await?;
        let account: AccountBalance = serde_json::from_value(first)?;
        if account.code == Some(-1) {
            return Err(OkxError::Api {
                code: -1,
                message: "exchange reported an account error".to_string(),
            });
        }
        Ok(account.details.into_iter().map(BalanceEntry::from).collect())
    }

    /// Move funds between accounts of the same user.
    ///
    /// POST /api/v5/asset/transfer
    ///
    /// `from`/`to` are OKX account codes, see [`crate::AccountType`]. The raw
    /// response is returned as-is; its business code is not inspected.
    pub async fn transfer_curr_acc(
        &self,
        currency: &str,
        amount: Decimal,
        from: impl AsRef<str>,
        to: impl AsRef<str>,
    ) -> ExchangeResult<Value> {
        let req = TransferRequest {
            ccy: currency.to_string(),
            amt: amount,
            from: from.as_ref().to_string(),
            to: to.as_ref().to_string(),
        };
        self.submit(TRANSFER_PATH, &req)
            .await
            .map_err(|err| ExchangeError::from_failure("transfer_curr_acc", err))
    }
}
