use crate::entity::{PreparedTransaction, TransactionResult, WalletError};
use crate::evm::chains;
use crate::privy::CustodyService;
use log::info;
use std::sync::Arc;

/// Relays prepared transactions to the custody service for signing and broadcast.
///
/// Used for approvals, swap settlements and transfers alike; failures are returned
/// as-is and never retried.
pub struct TransactionService {
    custody: Arc<dyn CustodyService>,
}

impl TransactionService {
    pub fn new(custody: Arc<dyn CustodyService>) -> Self {
        Self { custody }
    }

    pub async fn submit(
        &self,
        wallet_id: &str,
        transaction: &PreparedTransaction,
        chain_id: u64,
        sponsor: bool,
    ) -> Result<TransactionResult, WalletError> {
        let caip2 = chains::caip2(chain_id);

        info!(
            "Submitting transaction to {} on {} (value {}, sponsored: {})",
            transaction.to, caip2, transaction.value, sponsor
        );

        self.custody
            .send_transaction(wallet_id, &caip2, transaction, sponsor)
            .await
    }
}
