use crate::entity::{PreparedTransaction, TransactionResult, WalletError};
use crate::evm::{abi, address, ChainReader};
use crate::services::TransactionService;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_APPROVAL_DELAY: Duration = Duration::from_secs(5);

pub struct ApprovalRequest<'a> {
    pub wallet_id: &'a str,
    pub owner: &'a str,
    pub token: &'a str,
    pub spender: &'a str,
    /// Smallest units the spender must be allowed to move
    pub amount: u128,
    pub chain_id: u64,
}

/// Makes sure the settlement contract may spend the sell token.
///
/// Approves `type(uint256).max` rather than the exact amount, then sleeps for a fixed
/// delay. The delay does not confirm inclusion of the approval.
pub struct ApprovalService {
    transaction_service: Arc<TransactionService>,
    chain_reader: Option<Arc<dyn ChainReader>>,
    delay: Duration,
}

impl ApprovalService {
    pub fn new(
        transaction_service: Arc<TransactionService>,
        chain_reader: Option<Arc<dyn ChainReader>>,
        delay: Duration,
    ) -> Self {
        Self {
            transaction_service,
            chain_reader,
            delay,
        }
    }

    /// Returns the approval transaction when one had to be submitted
    pub async fn ensure_allowance(
        &self,
        request: &ApprovalRequest<'_>,
    ) -> Result<Option<TransactionResult>, WalletError> {
        if address::is_native_token(request.token) {
            info!("Native token needs no approval");
            return Ok(None);
        }

        if let Some(reader) = &self.chain_reader {
            match reader
                .allowance(request.chain_id, request.token, request.owner, request.spender)
                .await
            {
                Ok(current) if current >= request.amount => {
                    info!(
                        "Existing allowance {} covers {}, skipping approval",
                        current, request.amount
                    );
                    return Ok(None);
                }
                Ok(current) => info!(
                    "Allowance {} is below {}, approving {}",
                    current, request.amount, request.spender
                ),
                Err(e) => warn!("Could not read allowance, approving anyway: {}", e),
            }
        }

        let approval = PreparedTransaction::new(
            request.token,
            abi::encode_approve_max(request.spender),
        );

        let result = self
            .transaction_service
            .submit(request.wallet_id, &approval, request.chain_id, false)
            .await?;

        info!(
            "Approval submitted ({}), waiting {:?} before continuing",
            result.hash, self.delay
        );
        tokio::time::sleep(self.delay).await;

        Ok(Some(result))
    }
}
