use crate::entity::{PreparedTransaction, WalletError};
use crate::evm::{abi, address, chains, units, ChainReader};
use crate::services::TransactionService;
use async_trait::async_trait;
use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct WithdrawRequest {
    pub wallet_id: String,
    pub chain_id: u64,
    pub recipient: String,
    /// Human units
    pub amount: String,
    /// ERC-20 contract; `None` or the native sentinel withdraws the native token
    pub token: Option<String>,
    /// Overrides the on-chain `decimals()` lookup
    pub decimals: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResult {
    pub transaction_hash: String,
    pub recipient: String,
    pub amount: String,
    pub raw_amount: String,
    pub token: String,
    pub chain_id: u64,
    pub explorer_url: String,
}

#[async_trait]
pub trait WithdrawInteractor: Send + Sync {
    async fn execute_withdraw(&self, request: &WithdrawRequest)
        -> Result<WithdrawResult, WalletError>;
}

pub struct WithdrawInteractorImpl {
    transaction_service: Arc<TransactionService>,
    chain_reader: Option<Arc<dyn ChainReader>>,
}

impl WithdrawInteractorImpl {
    pub fn new(
        transaction_service: Arc<TransactionService>,
        chain_reader: Option<Arc<dyn ChainReader>>,
    ) -> Self {
        Self {
            transaction_service,
            chain_reader,
        }
    }

    async fn token_decimals(
        &self,
        chain_id: u64,
        token: &str,
        explicit: Option<u32>,
    ) -> Result<u32, WalletError> {
        if let Some(decimals) = explicit {
            return Ok(decimals);
        }
        match &self.chain_reader {
            Some(reader) => reader.decimals(chain_id, token).await,
            None => {
                warn!(
                    "No chain reader configured, assuming {} decimals for {}",
                    units::DEFAULT_TOKEN_DECIMALS,
                    token
                );
                Ok(units::DEFAULT_TOKEN_DECIMALS)
            }
        }
    }
}

#[async_trait]
impl WithdrawInteractor for WithdrawInteractorImpl {
    async fn execute_withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> Result<WithdrawResult, WalletError> {
        if request.wallet_id.trim().is_empty() {
            return Err(WalletError::validation("wallet id is required"));
        }
        let chain = chains::chain_info(request.chain_id)?;
        let recipient = address::parse_address(&request.recipient, "recipient address")?;

        let token = match &request.token {
            Some(token) if !address::is_native_token(token) => {
                Some(address::parse_address(token, "token address")?)
            }
            _ => None,
        };

        let (transaction, raw_amount, token_label) = match token {
            None => {
                let raw = units::to_smallest_unit(&request.amount, units::NATIVE_DECIMALS)?;
                let tx = PreparedTransaction::new(recipient.clone(), "0x").with_value(raw);
                (tx, raw, "native".to_string())
            }
            Some(token) => {
                // Check the amount shape before spending a network call on decimals
                units::parse_amount(&request.amount)?;
                let decimals = self
                    .token_decimals(request.chain_id, &token, request.decimals)
                    .await?;
                let raw = units::to_smallest_unit(&request.amount, decimals)?;
                let tx =
                    PreparedTransaction::new(token.clone(), abi::encode_transfer(&recipient, raw));
                (tx, raw, token)
            }
        };

        info!(
            "Withdrawing {} ({} base units) of {} to {}",
            request.amount, raw_amount, token_label, recipient
        );

        let result = self
            .transaction_service
            .submit(&request.wallet_id, &transaction, request.chain_id, false)
            .await?;

        Ok(WithdrawResult {
            explorer_url: chain.explorer_link(&result.hash),
            transaction_hash: result.hash,
            recipient,
            amount: request.amount.clone(),
            raw_amount: raw_amount.to_string(),
            token: token_label,
            chain_id: request.chain_id,
        })
    }
}
