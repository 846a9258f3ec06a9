/*
[INPUT]:  Command line arguments
[OUTPUT]: Parsed commands for the OKX REST tool
[POS]:    CLI layer - argument definitions
[UPDATE]: When adding commands or flags
*/

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use okx_rest_adapter::{AccountType, Order, Side};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "okx-rest", version, about = "Signed OKX REST calls from the command line")]
pub struct Cli {
    /// YAML file with client settings (base_url, timeout, simulated_trading)
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
    /// Send requests to OKX demo trading
    #[arg(long = "simulated")]
    pub simulated: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Available balance per currency
    Balance,
    /// Order book depth for an instrument
    Market {
        inst_id: String,
        #[arg(long, default_value_t = 5)]
        depth: u32,
    },
    /// Place cash-mode limit orders in one batch
    Order {
        inst_id: String,
        #[arg(value_enum)]
        side: SideArg,
        /// Order level as PRICE:SIZE, repeatable
        #[arg(long = "level", value_name = "PRICE:SIZE", value_parser = parse_level, required = true)]
        levels: Vec<Order>,
        /// Submit at most this many levels
        #[arg(long)]
        count: Option<usize>,
    },
    /// Move funds between accounts
    Transfer {
        currency: String,
        amount: Decimal,
        /// Source account: funding, trading or a raw OKX code
        #[arg(value_parser = parse_account)]
        from: String,
        /// Destination account: funding, trading or a raw OKX code
        #[arg(value_parser = parse_account)]
        to: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Side::Buy,
            SideArg::Sell => Side::Sell,
        }
    }
}

fn parse_level(raw: &str) -> Result<Order, String> {
    let (price, size) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected PRICE:SIZE, got {raw}"))?;
    let price = Decimal::from_str(price.trim()).map_err(|err| format!("price: {err}"))?;
    let size = Decimal::from_str(size.trim()).map_err(|err| format!("size: {err}"))?;
    Ok(Order::new(price, size))
}

fn parse_account(raw: &str) -> Result<String, String> {
    match raw.to_ascii_lowercase().as_str() {
        "funding" => Ok(AccountType::Funding.code().to_string()),
        "trading" => Ok(AccountType::Trading.code().to_string()),
        code if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) => Ok(code.to_string()),
        _ => Err(format!("unknown account {raw}")),
    }
}
