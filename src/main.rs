//! `walletctl` - command-line wallet operations for custody-held EVM wallets
use anyhow::{anyhow, Result};
use clap::Parser;
use dotenv::dotenv;
use evm_wallet_ops::commands::{Cli, CommandContext};
use evm_wallet_ops::view::OutputFormat;
use evm_wallet_ops::{AppConfig, ServiceContainer};
use log::{debug, info};
use std::process::ExitCode;
use std::sync::Arc;

async fn run(cli: Cli) -> Result<()> {
    let wallet_id = cli
        .wallet_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| {
            anyhow!("PRIVY_WALLET_ID must be set in environment variables or passed with --wallet")
        })?;

    let config = AppConfig::load()?;
    let services = Arc::new(ServiceContainer::new(&config)?);
    debug!("Services initialised");

    let ctx = CommandContext {
        services,
        wallet_id,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    cli.command.execute(&ctx).await
}

/// Application entry point
#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    info!("walletctl v{}", evm_wallet_ops::VERSION);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
