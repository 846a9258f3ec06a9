/*
[INPUT]:  Authenticated client and order parameters
[OUTPUT]: Batch order acceptance and transfer response
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use okx_rest_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Trading operations against OKX demo trading
///
/// Every request is signed with HMAC-SHA256 over
/// `timestamp + METHOD + path + body`.
#[tokio::main]
async fn main() {
    println!("=== OKX Trading Example (demo trading) ===\n");

    let config = ClientConfig {
        simulated_trading: true,
        ..ClientConfig::default()
    };
    let client = match OkxClient::from_env(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let orders = [
        Order::new(
            Decimal::from_str("1.00").unwrap_or_default(),
            Decimal::from_str("2").unwrap_or_default(),
        ),
        Order::new(
            Decimal::from_str("0.99").unwrap_or_default(),
            Decimal::from_str("3").unwrap_or_default(),
        ),
    ];

    println!("\nPlacing {} buy orders on TON-USDT...", orders.len());
    match client.put_orders("TON-USDT", Side::Buy, orders.len(), &orders).await {
        Ok(true) => println!("✓ Orders accepted"),
        Ok(false) => println!("✗ Orders rejected by exchange"),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nMoving 1 USDT from funding to trading...");
    match client
        .transfer_curr_acc("USDT", Decimal::ONE, AccountType::Funding, AccountType::Trading)
        .await
    {
        Ok(response) => println!("✓ Response: {}", response),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
