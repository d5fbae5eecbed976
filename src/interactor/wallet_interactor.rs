use crate::entity::WalletError;
use crate::evm::chains;
use crate::services::AddressResolver;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddress {
    pub wallet_id: String,
    pub address: String,
    pub chain_id: u64,
    pub chain_name: String,
}

#[async_trait]
pub trait WalletInteractor: Send + Sync {
    async fn get_wallet_address(
        &self,
        wallet_id: &str,
        chain_id: u64,
    ) -> Result<WalletAddress, WalletError>;
}

pub struct WalletInteractorImpl {
    address_resolver: Arc<AddressResolver>,
}

impl WalletInteractorImpl {
    pub fn new(address_resolver: Arc<AddressResolver>) -> Self {
        Self { address_resolver }
    }
}

#[async_trait]
impl WalletInteractor for WalletInteractorImpl {
    async fn get_wallet_address(
        &self,
        wallet_id: &str,
        chain_id: u64,
    ) -> Result<WalletAddress, WalletError> {
        if wallet_id.trim().is_empty() {
            return Err(WalletError::validation("wallet id is required"));
        }
        let chain = chains::chain_info(chain_id)?;
        let address = self.address_resolver.resolve(wallet_id, chain_id).await?;

        Ok(WalletAddress {
            wallet_id: wallet_id.to_string(),
            address,
            chain_id,
            chain_name: chain.name.to_string(),
        })
    }
}
