/*
[INPUT]:  Instrument identifier (e.g., "TON-USDT") and OKX credentials from env
[OUTPUT]: Trimmed order book and account balances
[POS]:    Examples - signed market/account queries
[UPDATE]: When adding new market data endpoints
*/

use okx_rest_adapter::*;

/// Example: Query order book and balances
///
/// Credentials are read from OKX_API_KEY / OKX_SECRET_KEY / OKX_PASSPHRASE
/// (or a `.env` file).
#[tokio::main]
async fn main() {
    println!("=== OKX Market Data Example ===\n");

    let client = match OkxClient::from_env(ClientConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.name());

    let inst_id = "TON-USDT";

    println!("Querying order book for {}...", inst_id);
    match client.get_market(inst_id, 5).await {
        Ok(book) => {
            println!("✓ Asks: {:?}", book.asks);
            println!("✓ Bids: {:?}", book.bids);
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying balances...");
    match client.get_balance().await {
        Ok(balances) => {
            for entry in balances {
                println!("  {} avail={} eqUsd={}", entry.ccy, entry.avail, entry.eq_usd);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
