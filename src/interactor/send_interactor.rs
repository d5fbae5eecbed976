use crate::entity::{PreparedTransaction, WalletError};
use crate::evm::{address, chains, units};
use crate::services::TransactionService;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResult {
    pub transaction_hash: String,
    pub to: String,
    pub value: String,
    pub chain_id: u64,
    pub explorer_url: String,
}

#[async_trait]
pub trait SendInteractor: Send + Sync {
    /// Build a transaction from raw user input. `value` is in wei, decimal or `0x` hex.
    fn prepare_transaction(
        &self,
        to: &str,
        data: &str,
        value: &str,
    ) -> Result<PreparedTransaction, WalletError>;

    async fn send_transaction(
        &self,
        wallet_id: &str,
        chain_id: u64,
        transaction: &PreparedTransaction,
        sponsor: bool,
    ) -> Result<SendResult, WalletError>;
}

pub struct SendInteractorImpl {
    transaction_service: Arc<TransactionService>,
}

impl SendInteractorImpl {
    pub fn new(transaction_service: Arc<TransactionService>) -> Self {
        Self {
            transaction_service,
        }
    }
}

#[async_trait]
impl SendInteractor for SendInteractorImpl {
    fn prepare_transaction(
        &self,
        to: &str,
        data: &str,
        value: &str,
    ) -> Result<PreparedTransaction, WalletError> {
        let to = address::parse_address(to, "destination address")?;

        let data = if data.trim().is_empty() { "0x" } else { data.trim() };
        if !address::is_hex_data(data) {
            return Err(WalletError::validation(format!(
                "Call data must be 0x-prefixed hex: {}",
                data
            )));
        }

        let value = units::parse_quantity(value)?;

        Ok(PreparedTransaction::new(to, data).with_value(value))
    }

    async fn send_transaction(
        &self,
        wallet_id: &str,
        chain_id: u64,
        transaction: &PreparedTransaction,
        sponsor: bool,
    ) -> Result<SendResult, WalletError> {
        if wallet_id.trim().is_empty() {
            return Err(WalletError::validation("wallet id is required"));
        }
        let chain = chains::chain_info(chain_id)?;

        let result = self
            .transaction_service
            .submit(wallet_id, transaction, chain_id, sponsor)
            .await?;

        Ok(SendResult {
            explorer_url: chain.explorer_link(&result.hash),
            transaction_hash: result.hash,
            to: transaction.to.clone(),
            value: transaction.value.to_string(),
            chain_id,
        })
    }
}
