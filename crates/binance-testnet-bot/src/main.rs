/*
[INPUT]:  CLI arguments, optional YAML configuration, API credentials in env/.env
[OUTPUT]: Order report on stdout, log lines in the log file, process exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use binance_testnet_bot::logging::{LoggingConfig, init_logging};
use binance_testnet_bot::{BotConfig, OrderArgs, TradingContext, execute, report};

#[derive(Parser, Debug)]
#[command(
    name = "binance-testnet-bot",
    version,
    about = "Place a single order on the Binance USDT-M futures testnet",
    after_help = "Examples:\n  Market order:  binance-testnet-bot --symbol BTCUSDT --side BUY --type MARKET --quantity 0.001\n  Limit order:   binance-testnet-bot --symbol BTCUSDT --side SELL --type LIMIT --quantity 0.001 --price 50000"
)]
struct Cli {
    /// Trading pair symbol (e.g., BTCUSDT)
    #[arg(long)]
    symbol: String,
    /// Order side: BUY or SELL
    #[arg(long)]
    side: String,
    /// Order type: MARKET or LIMIT
    #[arg(long = "type", value_name = "TYPE")]
    order_type: String,
    /// Order quantity
    #[arg(long, allow_negative_numbers = true)]
    quantity: String,
    /// Order price (required for LIMIT orders)
    #[arg(long, allow_negative_numbers = true)]
    price: Option<String>,
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// Validate and print the request without sending it
    #[arg(long = "dry-run")]
    dry_run: bool,
}

impl Cli {
    fn order_args(&self) -> OrderArgs {
        OrderArgs {
            symbol: self.symbol.clone(),
            side: self.side.clone(),
            order_type: self.order_type.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let (config, _guard) = match setup(&args) {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let execution = execute(&args.order_args(), args.dry_run, || {
        TradingContext::from_env(&config)
    })
    .await;

    print!("{}", report::render(&execution));
    execution.exit_code()
}

fn setup(args: &Cli) -> Result<(BotConfig, WorkerGuard)> {
    // A missing .env is fine; real env vars take precedence
    let _ = dotenvy::dotenv();

    let mut config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => BotConfig::default(),
    };
    if let Some(log_file) = &args.log_file {
        config.log_file = log_file.clone();
    }
    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone();
    }

    let guard = init_logging(&LoggingConfig::from(&config))?;
    info!(
        base_url = %config.base_url,
        dry_run = args.dry_run,
        "starting binance-testnet-bot"
    );
    Ok((config, guard))
}

fn load_config(path: &Path) -> Result<BotConfig> {
    BotConfig::from_file(path).with_context(|| format!("load config {}", path.display()))
}
