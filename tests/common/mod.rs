#![allow(dead_code)]

use async_trait::async_trait;
use evm_wallet_ops::bebop::{QuoteParams, QuoteService};
use evm_wallet_ops::entity::{
    PreparedTransaction, Quote, TokenBalance, TransactionResult, WalletError,
};
use evm_wallet_ops::evm::ChainReader;
use evm_wallet_ops::privy::{CustodyService, PrivyWallet};
use evm_wallet_ops::ServiceContainer;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const WALLET_ID: &str = "w1";
pub const TAKER: &str = "0x1111111111111111111111111111111111111111";
pub const WETH_BASE: &str = "0x4200000000000000000000000000000000000006";
pub const USDC_BASE: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
pub const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";
pub const SETTLEMENT: &str = "0xbbbbbBB520d69a9775E85b458C58c648259FAD5F";

#[derive(Debug, Clone)]
pub struct Submission {
    pub wallet_id: String,
    pub caip2: String,
    pub transaction: PreparedTransaction,
    pub sponsor: bool,
}

/// Custody service double that records every call
pub struct MockCustodyService {
    address: String,
    chain_type: String,
    wallet_known: bool,
    fail_submission_at: Option<usize>,
    hashes: Mutex<VecDeque<String>>,
    balances: Vec<TokenBalance>,
    pub wallet_lookups: AtomicUsize,
    pub submissions: Mutex<Vec<Submission>>,
    pub balance_queries: Mutex<Vec<(Vec<String>, Vec<String>)>>,
}

impl MockCustodyService {
    pub fn new() -> Self {
        Self {
            address: TAKER.to_string(),
            chain_type: "ethereum".to_string(),
            wallet_known: true,
            fail_submission_at: None,
            hashes: Mutex::new(VecDeque::new()),
            balances: Vec::new(),
            wallet_lookups: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
            balance_queries: Mutex::new(Vec::new()),
        }
    }

    /// Hashes handed out in order; `0xabc` once they run out
    pub fn with_hashes(mut self, hashes: &[&str]) -> Self {
        self.hashes = Mutex::new(hashes.iter().map(|h| h.to_string()).collect());
        self
    }

    /// Make the n-th (0-based) submission fail
    pub fn failing_submission_at(mut self, index: usize) -> Self {
        self.fail_submission_at = Some(index);
        self
    }

    pub fn unknown_wallet(mut self) -> Self {
        self.wallet_known = false;
        self
    }

    pub fn with_chain_type(mut self, chain_type: &str) -> Self {
        self.chain_type = chain_type.to_string();
        self
    }

    pub fn with_balances(mut self, balances: Vec<TokenBalance>) -> Self {
        self.balances = balances;
        self
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        self.wallet_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CustodyService for MockCustodyService {
    async fn get_wallet(&self, wallet_id: &str) -> Result<PrivyWallet, WalletError> {
        self.wallet_lookups.fetch_add(1, Ordering::SeqCst);
        if !self.wallet_known {
            return Err(WalletError::Resolution(format!(
                "Wallet {} not found",
                wallet_id
            )));
        }
        Ok(PrivyWallet {
            id: wallet_id.to_string(),
            address: self.address.clone(),
            chain_type: self.chain_type.clone(),
        })
    }

    async fn send_transaction(
        &self,
        wallet_id: &str,
        caip2: &str,
        transaction: &PreparedTransaction,
        sponsor: bool,
    ) -> Result<TransactionResult, WalletError> {
        let index = {
            let mut submissions = self.submissions.lock().unwrap();
            submissions.push(Submission {
                wallet_id: wallet_id.to_string(),
                caip2: caip2.to_string(),
                transaction: transaction.clone(),
                sponsor,
            });
            submissions.len() - 1
        };

        if self.fail_submission_at == Some(index) {
            return Err(WalletError::Submission(
                "custody service unavailable".to_string(),
            ));
        }

        let hash = self
            .hashes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "0xabc".to_string());

        Ok(TransactionResult {
            hash,
            caip2: caip2.to_string(),
        })
    }

    async fn get_balances(
        &self,
        _wallet_id: &str,
        assets: &[String],
        chains: &[String],
    ) -> Result<Vec<TokenBalance>, WalletError> {
        self.balance_queries
            .lock()
            .unwrap()
            .push((assets.to_vec(), chains.to_vec()));
        Ok(self.balances.clone())
    }
}

/// Quote service double returning a canned quote or error
pub struct MockQuoteService {
    response: Result<Quote, String>,
    pub calls: Mutex<Vec<QuoteParams>>,
}

impl MockQuoteService {
    pub fn with_quote(quote: Quote) -> Self {
        Self {
            response: Ok(quote),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_error(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<QuoteParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteService for MockQuoteService {
    async fn get_quote(&self, params: &QuoteParams) -> Result<Quote, WalletError> {
        self.calls.lock().unwrap().push(params.clone());
        match &self.response {
            Ok(quote) => Ok(quote.clone()),
            Err(message) => Err(WalletError::Quote(message.clone())),
        }
    }
}

/// Chain reader double with fixed answers
pub struct MockChainReader {
    allowance: Result<u128, String>,
    decimals: u32,
    pub allowance_calls: AtomicUsize,
    pub decimals_calls: AtomicUsize,
}

impl MockChainReader {
    pub fn new(allowance: u128, decimals: u32) -> Self {
        Self {
            allowance: Ok(allowance),
            decimals,
            allowance_calls: AtomicUsize::new(0),
            decimals_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            allowance: Err("connection refused".to_string()),
            decimals: 18,
            allowance_calls: AtomicUsize::new(0),
            decimals_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    async fn allowance(
        &self,
        _chain_id: u64,
        _token: &str,
        _owner: &str,
        _spender: &str,
    ) -> Result<u128, WalletError> {
        self.allowance_calls.fetch_add(1, Ordering::SeqCst);
        self.allowance
            .clone()
            .map_err(WalletError::ChainRead)
    }

    async fn decimals(&self, _chain_id: u64, _token: &str) -> Result<u32, WalletError> {
        self.decimals_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.decimals)
    }
}

pub fn settlement_quote(sell_amount: &str, buy_amount: Option<&str>) -> Quote {
    Quote {
        quote_id: Some("q-1".to_string()),
        sell_amount: sell_amount.to_string(),
        buy_amount: buy_amount.map(str::to_string),
        transaction: PreparedTransaction::new(SETTLEMENT, "0x4dcebcba00"),
        settlement_address: Some(SETTLEMENT.to_string()),
        approval_target: Some(SETTLEMENT.to_string()),
    }
}

pub fn container(
    custody: &Arc<MockCustodyService>,
    quotes: &Arc<MockQuoteService>,
    reader: Option<&Arc<MockChainReader>>,
    approval_delay: Duration,
) -> ServiceContainer {
    ServiceContainer::with_services(
        custody.clone(),
        quotes.clone(),
        reader.map(|r| r.clone() as Arc<dyn ChainReader>),
        approval_delay,
    )
}
