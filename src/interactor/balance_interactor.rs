use crate::entity::{TokenBalance, WalletError};
use crate::evm::chains;
use crate::privy::CustodyService;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait BalanceInteractor: Send + Sync {
    async fn get_wallet_balances(
        &self,
        wallet_id: &str,
        assets: &[String],
        chain_ids: &[u64],
    ) -> Result<Vec<TokenBalance>, WalletError>;
}

pub struct BalanceInteractorImpl {
    custody: Arc<dyn CustodyService>,
}

impl BalanceInteractorImpl {
    pub fn new(custody: Arc<dyn CustodyService>) -> Self {
        Self { custody }
    }
}

#[async_trait]
impl BalanceInteractor for BalanceInteractorImpl {
    async fn get_wallet_balances(
        &self,
        wallet_id: &str,
        assets: &[String],
        chain_ids: &[u64],
    ) -> Result<Vec<TokenBalance>, WalletError> {
        if wallet_id.trim().is_empty() {
            return Err(WalletError::validation("wallet id is required"));
        }
        if assets.is_empty() || chain_ids.is_empty() {
            return Err(WalletError::validation(
                "at least one asset and one chain are required",
            ));
        }

        let chain_names = chain_ids
            .iter()
            .map(|chain_id| chains::balance_chain(*chain_id).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        let assets: Vec<String> = assets.iter().map(|asset| asset.to_lowercase()).collect();

        self.custody
            .get_balances(wallet_id, &assets, &chain_names)
            .await
    }
}
