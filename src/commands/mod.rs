use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::di::ServiceContainer;
use crate::view::OutputFormat;

pub mod address;
pub mod balance;
pub mod send;
pub mod swap;
pub mod withdraw;

/// Wallet operations and token swaps for custody-held EVM wallets
#[derive(Parser, Debug)]
#[command(name = "walletctl", version, about)]
pub struct Cli {
    /// Custody wallet identifier
    #[arg(
        long = "wallet",
        env = "PRIVY_WALLET_ID",
        hide_env_values = true,
        global = true
    )]
    pub wallet_id: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the wallet's on-chain address
    Address(address::AddressArgs),
    /// Show wallet balances
    Balance(balance::BalanceArgs),
    /// Sign and broadcast a raw transaction
    Send(send::SendArgs),
    /// Transfer native or ERC-20 funds to another address
    Withdraw(withdraw::WithdrawArgs),
    /// Swap tokens on a single chain
    Swap(swap::SwapArgs),
}

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    pub services: Arc<ServiceContainer>,
    pub wallet_id: String,
    pub format: OutputFormat,
}

/// Trait that defines a command handler
pub trait CommandHandler {
    /// Execute the command
    async fn execute(self, ctx: &CommandContext) -> Result<()>;
}

impl Commands {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Address(args) => args.execute(ctx).await,
            Commands::Balance(args) => args.execute(ctx).await,
            Commands::Send(args) => args.execute(ctx).await,
            Commands::Withdraw(args) => args.execute(ctx).await,
            Commands::Swap(args) => args.execute(ctx).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_swap_flags() {
        let cli = Cli::try_parse_from([
            "walletctl",
            "--wallet",
            "w1",
            "swap",
            "0x4200000000000000000000000000000000000006",
            "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
            "1.5",
            "8453",
            "--skip-approval",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.wallet_id.as_deref(), Some("w1"));
        assert!(cli.json);
        match cli.command {
            Commands::Swap(args) => {
                assert_eq!(args.amount, "1.5");
                assert_eq!(args.chain, 8453);
                assert!(args.skip_approval);
                assert!(!args.gasless);
                assert_eq!(args.dest_chain, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn swap_requires_positional_arguments() {
        assert!(Cli::try_parse_from(["walletctl", "swap", "0x01"]).is_err());
    }
}
