/*
[INPUT]:  CLI arguments, optional YAML configuration, OKX credentials from env
[OUTPUT]: JSON results of one signed OKX REST call
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or output format
*/

mod cli;
mod config;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use okx_rest_adapter::{ExchangeError, OkxClient};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut client_config =
        config::load_client_config(args.config_path.as_deref()).context("load config")?;
    if args.simulated {
        client_config.simulated_trading = true;
    }
    debug!(
        base_url = %client_config.base_url,
        simulated = client_config.simulated_trading,
        "configuration loaded"
    );

    let client = OkxClient::from_env(client_config).context("create OKX client")?;
    run(&client, args.command).await
}

async fn run(client: &OkxClient, command: Command) -> Result<()> {
    match command {
        Command::Balance => print_outcome(client.get_balance().await),
        Command::Market { inst_id, depth } => print_outcome(client.get_market(&inst_id, depth).await),
        Command::Order {
            inst_id,
            side,
            levels,
            count,
        } => {
            let count = count.unwrap_or(levels.len());
            let accepted = client
                .put_orders(&inst_id, side.into(), count, &levels)
                .await;
            if let Ok(flag) = &accepted {
                info!(inst_id = %inst_id, accepted = *flag, "batch order result");
            }
            print_outcome(accepted)
        }
        Command::Transfer {
            currency,
            amount,
            from,
            to,
        } => print_outcome(client.transfer_curr_acc(&currency, amount, &from, &to).await),
    }
}

fn print_outcome<T: Serialize>(outcome: Result<T, ExchangeError>) -> Result<()> {
    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err)?);
            Err(anyhow::Error::new(err).context("request failed"))
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
