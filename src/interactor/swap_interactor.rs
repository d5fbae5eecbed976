use crate::bebop::{QuoteParams, QuoteService};
use crate::entity::{QuoteSummary, SwapRequest, SwapResult, WalletError};
use crate::evm::{address, chains, units};
use crate::services::{AddressResolver, ApprovalRequest, ApprovalService, TransactionService};
use async_trait::async_trait;
use log::{info, warn};
use std::fmt;
use std::sync::Arc;

/// Stages of a swap, entered strictly in this order and never re-entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStage {
    Resolving,
    Approving,
    Quoting,
    Executing,
    Done,
}

impl fmt::Display for SwapStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Resolving => write!(f, "Resolving"),
            Self::Approving => write!(f, "Approving"),
            Self::Quoting => write!(f, "Quoting"),
            Self::Executing => write!(f, "Executing"),
            Self::Done => write!(f, "Done"),
        }
    }
}

#[async_trait]
pub trait SwapInteractor: Send + Sync {
    /// Checks everything that can be checked without touching the network
    fn validate_swap_request(&self, request: &SwapRequest) -> Result<(), WalletError>;

    async fn execute_swap(&self, request: &SwapRequest) -> Result<SwapResult, WalletError>;
}

pub struct SwapInteractorImpl {
    address_resolver: Arc<AddressResolver>,
    approval_service: Arc<ApprovalService>,
    quote_service: Arc<dyn QuoteService>,
    transaction_service: Arc<TransactionService>,
}

impl SwapInteractorImpl {
    pub fn new(
        address_resolver: Arc<AddressResolver>,
        approval_service: Arc<ApprovalService>,
        quote_service: Arc<dyn QuoteService>,
        transaction_service: Arc<TransactionService>,
    ) -> Self {
        Self {
            address_resolver,
            approval_service,
            quote_service,
            transaction_service,
        }
    }

    fn enter(stage: SwapStage, request: &SwapRequest) {
        info!(
            "[swap {} -> {} on {}] {}",
            request.sell_token, request.buy_token, request.chain_id, stage
        );
    }

    /// Validated copy of the request carrying the trimmed token addresses
    fn normalize(request: &SwapRequest) -> Result<SwapRequest, WalletError> {
        if request.wallet_id.trim().is_empty() {
            return Err(WalletError::validation("wallet id is required"));
        }
        if request.chain_id == 0 {
            return Err(WalletError::validation("chain id is required"));
        }

        let sell_token = address::parse_address(&request.sell_token, "sell token")?;
        let buy_token = address::parse_address(&request.buy_token, "buy token")?;

        if address::same_address(&sell_token, &buy_token) {
            return Err(WalletError::validation(
                "Sell and buy tokens must be different",
            ));
        }

        units::to_smallest_unit(&request.amount, units::DEFAULT_TOKEN_DECIMALS)?;

        if let Some(dest_chain_id) = request.dest_chain_id {
            if dest_chain_id != request.chain_id {
                return Err(WalletError::validation(format!(
                    "Cross-chain swaps are not supported (chain {} -> {})",
                    request.chain_id, dest_chain_id
                )));
            }
        }

        chains::chain_info(request.chain_id)?;

        Ok(SwapRequest {
            sell_token,
            buy_token,
            ..request.clone()
        })
    }
}

#[async_trait]
impl SwapInteractor for SwapInteractorImpl {
    fn validate_swap_request(&self, request: &SwapRequest) -> Result<(), WalletError> {
        Self::normalize(request).map(|_| ())
    }

    async fn execute_swap(&self, request: &SwapRequest) -> Result<SwapResult, WalletError> {
        let request = &Self::normalize(request)?;
        let chain = chains::chain_info(request.chain_id)?;

        Self::enter(SwapStage::Resolving, request);
        let taker = self
            .address_resolver
            .resolve(&request.wallet_id, request.chain_id)
            .await?;

        // A failure past this point leaves any submitted approval in place
        let approval = if request.skip_approval {
            info!("Skipping approval as requested");
            None
        } else {
            Self::enter(SwapStage::Approving, request);
            let amount = units::to_smallest_unit(&request.amount, units::DEFAULT_TOKEN_DECIMALS)?;
            self.approval_service
                .ensure_allowance(&ApprovalRequest {
                    wallet_id: &request.wallet_id,
                    owner: &taker,
                    token: &request.sell_token,
                    spender: chain.settlement_address,
                    amount,
                    chain_id: request.chain_id,
                })
                .await?
        };

        Self::enter(SwapStage::Quoting, request);
        let quote = self
            .quote_service
            .get_quote(&QuoteParams {
                taker_address: taker.clone(),
                sell_token: request.sell_token.clone(),
                buy_token: request.buy_token.clone(),
                sell_amount: request.amount.clone(),
                chain_id: request.chain_id,
                gasless: request.gasless,
            })
            .await?;

        if let Some(quote_id) = &quote.quote_id {
            info!("Received quote {}", quote_id);
        }
        if !quote.approval_target_matches(chain.settlement_address) {
            warn!(
                "Quote approval target {:?} differs from settlement contract {}",
                quote.approval_target, chain.settlement_address
            );
        }
        if !quote.settles_through_transaction_target() {
            warn!(
                "Quote settlement address {:?} differs from transaction target {}",
                quote.settlement_address, quote.transaction.to
            );
        }

        Self::enter(SwapStage::Executing, request);
        let result = self
            .transaction_service
            .submit(
                &request.wallet_id,
                &quote.transaction,
                request.chain_id,
                request.gasless,
            )
            .await?;

        Self::enter(SwapStage::Done, request);

        Ok(SwapResult {
            success: true,
            explorer_url: chain.explorer_link(&result.hash),
            transaction_hash: result.hash,
            sell_token: request.sell_token.clone(),
            buy_token: request.buy_token.clone(),
            amount: request.amount.clone(),
            chain_id: request.chain_id,
            quote: QuoteSummary::from(&quote),
            approval_transaction_hash: approval.map(|tx| tx.hash),
        })
    }
}
