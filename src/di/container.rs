use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::bebop::{BebopQuoteService, QuoteService};
use crate::config::AppConfig;
use crate::evm::{ChainReader, JsonRpcChainReader};
use crate::interactor::{
    BalanceInteractorImpl, SendInteractorImpl, SwapInteractorImpl, WalletInteractorImpl,
    WithdrawInteractorImpl,
};
use crate::privy::{CustodyService, PrivyClient};
use crate::services::{AddressResolver, ApprovalService, TransactionService};

/// ServiceContainer wires the external clients into the services and interactors
pub struct ServiceContainer {
    // External collaborators
    custody: Arc<dyn CustodyService>,
    quote_service: Arc<dyn QuoteService>,
    chain_reader: Option<Arc<dyn ChainReader>>,

    // Core services
    address_resolver: Arc<AddressResolver>,
    transaction_service: Arc<TransactionService>,
    approval_service: Arc<ApprovalService>,
}

impl ServiceContainer {
    /// Build the production clients from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.http_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        let custody = Arc::new(PrivyClient::new(
            http_client.clone(),
            &config.privy_api_url,
            &config.privy_app_id,
            &config.privy_app_secret,
        )) as Arc<dyn CustodyService>;

        let quote_service = Arc::new(BebopQuoteService::new(
            http_client.clone(),
            &config.bebop_api_url,
        )) as Arc<dyn QuoteService>;

        let chain_reader = Arc::new(JsonRpcChainReader::new(
            http_client,
            config.rpc_url.clone(),
        )) as Arc<dyn ChainReader>;

        Ok(Self::with_services(
            custody,
            quote_service,
            Some(chain_reader),
            config.approval_delay(),
        ))
    }

    /// Assemble the container around caller-supplied collaborators
    pub fn with_services(
        custody: Arc<dyn CustodyService>,
        quote_service: Arc<dyn QuoteService>,
        chain_reader: Option<Arc<dyn ChainReader>>,
        approval_delay: std::time::Duration,
    ) -> Self {
        let address_resolver = Arc::new(AddressResolver::new(custody.clone()));
        let transaction_service = Arc::new(TransactionService::new(custody.clone()));
        let approval_service = Arc::new(ApprovalService::new(
            transaction_service.clone(),
            chain_reader.clone(),
            approval_delay,
        ));

        Self {
            custody,
            quote_service,
            chain_reader,
            address_resolver,
            transaction_service,
            approval_service,
        }
    }

    // Interactor factories

    pub fn swap_interactor(&self) -> Arc<SwapInteractorImpl> {
        Arc::new(SwapInteractorImpl::new(
            self.address_resolver.clone(),
            self.approval_service.clone(),
            self.quote_service.clone(),
            self.transaction_service.clone(),
        ))
    }

    pub fn send_interactor(&self) -> Arc<SendInteractorImpl> {
        Arc::new(SendInteractorImpl::new(self.transaction_service.clone()))
    }

    pub fn withdraw_interactor(&self) -> Arc<WithdrawInteractorImpl> {
        Arc::new(WithdrawInteractorImpl::new(
            self.transaction_service.clone(),
            self.chain_reader.clone(),
        ))
    }

    pub fn balance_interactor(&self) -> Arc<BalanceInteractorImpl> {
        Arc::new(BalanceInteractorImpl::new(self.custody.clone()))
    }

    pub fn wallet_interactor(&self) -> Arc<WalletInteractorImpl> {
        Arc::new(WalletInteractorImpl::new(self.address_resolver.clone()))
    }
}
