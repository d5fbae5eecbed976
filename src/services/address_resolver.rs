use crate::entity::WalletError;
use crate::evm::{address, chains};
use crate::privy::CustodyService;
use crate::privy::models::ETHEREUM_CHAIN_TYPE;
use log::info;
use std::sync::Arc;

/// Maps a custody wallet id to its on-chain address
pub struct AddressResolver {
    custody: Arc<dyn CustodyService>,
}

impl AddressResolver {
    pub fn new(custody: Arc<dyn CustodyService>) -> Self {
        Self { custody }
    }

    pub async fn resolve(&self, wallet_id: &str, chain_id: u64) -> Result<String, WalletError> {
        chains::chain_info(chain_id)?;

        let wallet = self.custody.get_wallet(wallet_id).await?;

        // EVM wallets share one address across every EVM chain
        if wallet.chain_type != ETHEREUM_CHAIN_TYPE {
            return Err(WalletError::Resolution(format!(
                "Wallet {} is a {} wallet, not an EVM wallet",
                wallet_id, wallet.chain_type
            )));
        }

        if !address::is_valid_address(&wallet.address) {
            return Err(WalletError::Resolution(format!(
                "Custody service returned a malformed address: {}",
                wallet.address
            )));
        }

        info!(
            "Resolved wallet {} to {} on chain {}",
            wallet_id, wallet.address, chain_id
        );

        Ok(wallet.address)
    }
}
