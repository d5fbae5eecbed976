use crate::interactor::WalletAddress;
use crate::view::{print_json, OutputFormat};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait WalletView: Send + Sync {
    async fn display_address(&self, wallet: &WalletAddress) -> Result<()>;
}

pub struct ConsoleWalletView {
    format: OutputFormat,
}

impl ConsoleWalletView {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

#[async_trait]
impl WalletView for ConsoleWalletView {
    async fn display_address(&self, wallet: &WalletAddress) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(wallet),
            OutputFormat::Text => {
                println!(
                    "Wallet {} on {}: {}",
                    wallet.wallet_id, wallet.chain_name, wallet.address
                );
                Ok(())
            }
        }
    }
}
